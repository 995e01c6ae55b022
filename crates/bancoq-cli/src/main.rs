use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use bancoq_core::QuestionBank;
use bancoq_parsing::{ParserConfig, parse_question_bank};

mod import;
mod output;

use output::ColorMode;

/// Question bank converter - extract subjects, questions and answers into JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a question bank PDF to JSON
    Pdf {
        /// Path to the input PDF
        #[arg(long, default_value = "banco_preguntas.pdf")]
        input: PathBuf,

        /// Path to the JSON output
        #[arg(long, default_value = "banco_preguntas.json")]
        output: PathBuf,

        /// Where the raw extracted text is dumped for inspection
        #[arg(long, default_value = "texto_extraido.txt")]
        dump_text: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Convert a question bank TXT dump to JSON
    Txt {
        /// Path to the input text file
        #[arg(long, default_value = "banco_preguntas.txt")]
        input: PathBuf,

        /// Path to the JSON output
        #[arg(long, default_value = "banco_preguntas.json")]
        output: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Load a generated JSON file into a SQLite database
    Import {
        /// Path to the JSON file produced by `pdf` or `txt`
        #[arg(long, default_value = "banco_preguntas.json")]
        input: PathBuf,

        /// Path to the SQLite database
        #[arg(long, default_value = "banco_preguntas.db")]
        database: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Pdf {
            input,
            output,
            dump_text,
            no_color,
        } => convert_pdf(&input, &output, &dump_text, no_color),
        Command::Txt {
            input,
            output,
            no_color,
        } => convert_txt(&input, &output, no_color),
        Command::Import {
            input,
            database,
            no_color,
        } => run_import(&input, &database, no_color),
    }
}

fn convert_pdf(input: &Path, output: &Path, dump_text: &Path, no_color: bool) -> anyhow::Result<()> {
    let color = ColorMode(!no_color);
    let mut stdout = std::io::stdout();

    // Backend availability is checked up front, before any file access.
    let backend = bancoq_extract::select_backend()?;

    if !input.exists() {
        anyhow::bail!("input file not found: {}", input.display());
    }

    output::print_stage(&mut stdout, &format!("Extracting text from {}", input.display()))?;
    let text = backend
        .extract_text(input)
        .with_context(|| format!("extracting text from {}", input.display()))?;
    tracing::info!(
        backend = backend.name(),
        chars = text.len(),
        "text extracted"
    );

    std::fs::write(dump_text, &text)
        .with_context(|| format!("writing extracted text to {}", dump_text.display()))?;
    output::print_stage(
        &mut stdout,
        &format!("Raw text saved to {} for reference", dump_text.display()),
    )?;

    write_bank(&text, &ParserConfig::pdf(), output, color)
}

fn convert_txt(input: &Path, output: &Path, no_color: bool) -> anyhow::Result<()> {
    let color = ColorMode(!no_color);
    let mut stdout = std::io::stdout();

    if !input.exists() {
        anyhow::bail!("input file not found: {}", input.display());
    }

    output::print_stage(&mut stdout, &format!("Reading text file {}", input.display()))?;
    let text = bancoq_extract::read_text_file(input)
        .with_context(|| format!("reading {}", input.display()))?;

    write_bank(&text, &ParserConfig::txt(), output, color)
}

fn write_bank(
    text: &str,
    config: &ParserConfig,
    output_path: &Path,
    color: ColorMode,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();

    output::print_stage(&mut stdout, "Parsing question bank structure")?;
    let bank = parse_question_bank(text, config);

    let json = bank.to_json().context("serializing question bank")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("writing {}", output_path.display()))?;

    output::print_conversion_summary(&mut stdout, &bank, output_path, color)?;
    Ok(())
}

fn run_import(input: &Path, database: &Path, no_color: bool) -> anyhow::Result<()> {
    let color = ColorMode(!no_color);
    let mut stdout = std::io::stdout();

    if !input.exists() {
        anyhow::bail!("input file not found: {}", input.display());
    }

    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let bank: QuestionBank =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", input.display()))?;

    let counts = import::import_bank(database, &bank)
        .with_context(|| format!("importing into {}", database.display()))?;

    output::print_import_summary(&mut stdout, &counts, database, color)?;
    Ok(())
}
