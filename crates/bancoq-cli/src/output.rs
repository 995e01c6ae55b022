use std::io::Write;
use std::path::Path;

use bancoq_core::QuestionBank;
use owo_colors::OwoColorize;

use crate::import::ImportCounts;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a pipeline stage announcement.
pub fn print_stage(w: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(w, "{}...", message)
}

/// Print the conversion summary: output location, totals, and the
/// per-subject breakdown.
pub fn print_conversion_summary(
    w: &mut dyn Write,
    bank: &QuestionBank,
    output_path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w)?;
    if color.enabled() {
        writeln!(
            w,
            "{} {}",
            "Question bank written to".green(),
            output_path.display()
        )?;
    } else {
        writeln!(w, "Question bank written to {}", output_path.display())?;
    }
    writeln!(w, "Total subjects: {}", bank.total_materias)?;
    writeln!(w, "Total questions: {}", bank.total_preguntas)?;

    if !bank.subjects.is_empty() {
        writeln!(w)?;
        writeln!(w, "Questions per subject:")?;
        for subject in &bank.subjects {
            let line = format!("  {}: {} questions", subject.name, subject.questions.len());
            if color.enabled() {
                writeln!(w, "{}", line.dimmed())?;
            } else {
                writeln!(w, "{}", line)?;
            }
        }
    }
    Ok(())
}

/// Print the SQLite import summary.
pub fn print_import_summary(
    w: &mut dyn Write,
    counts: &ImportCounts,
    db_path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Import finished:".green(), db_path.display())?;
    } else {
        writeln!(w, "Import finished: {}", db_path.display())?;
    }
    writeln!(w, "  {} subjects", counts.materias)?;
    writeln!(w, "  {} questions", counts.preguntas)?;
    writeln!(w, "  {} answers", counts.respuestas)?;
    Ok(())
}
