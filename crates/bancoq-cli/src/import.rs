use std::path::Path;

use rusqlite::{Connection, params};

use bancoq_core::QuestionBank;

/// Row counts actually inserted by an import run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportCounts {
    pub materias: usize,
    pub preguntas: usize,
    pub respuestas: usize,
}

/// Load a question bank into SQLite, replacing any previous content.
///
/// The schema matches what the quiz application consuming the database
/// expects; `es_correcta` starts at 0 and is filled in by a later review
/// step, never by the import. Duplicate question numbers within a subject
/// and duplicate option letters within a question are ignored; the first
/// row wins. Everything runs in one transaction.
pub fn import_bank(db_path: &Path, bank: &QuestionBank) -> Result<ImportCounts, rusqlite::Error> {
    let mut conn = Connection::open(db_path)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS materias (
             id     INTEGER PRIMARY KEY AUTOINCREMENT,
             nombre TEXT NOT NULL UNIQUE
         );
         CREATE TABLE IF NOT EXISTS preguntas (
             id         INTEGER PRIMARY KEY AUTOINCREMENT,
             materia_id INTEGER NOT NULL,
             numero     TEXT NOT NULL,
             texto      TEXT NOT NULL,
             FOREIGN KEY (materia_id) REFERENCES materias(id),
             UNIQUE(materia_id, numero)
         );
         CREATE TABLE IF NOT EXISTS respuestas (
             id          INTEGER PRIMARY KEY AUTOINCREMENT,
             pregunta_id INTEGER NOT NULL,
             opcion      TEXT NOT NULL,
             texto       TEXT NOT NULL,
             es_correcta INTEGER DEFAULT 0,
             FOREIGN KEY (pregunta_id) REFERENCES preguntas(id),
             UNIQUE(pregunta_id, opcion)
         );",
    )?;

    let tx = conn.transaction()?;

    // Replace-everything semantics: children first.
    tx.execute("DELETE FROM respuestas", [])?;
    tx.execute("DELETE FROM preguntas", [])?;
    tx.execute("DELETE FROM materias", [])?;

    let mut counts = ImportCounts::default();
    for subject in &bank.subjects {
        tx.execute(
            "INSERT INTO materias (nombre) VALUES (?1)",
            params![subject.name],
        )?;
        let materia_id = tx.last_insert_rowid();
        counts.materias += 1;

        for question in &subject.questions {
            let inserted = tx.execute(
                "INSERT OR IGNORE INTO preguntas (materia_id, numero, texto) VALUES (?1, ?2, ?3)",
                params![materia_id, question.number, question.text],
            )?;
            let pregunta_id = if inserted > 0 {
                counts.preguntas += 1;
                tx.last_insert_rowid()
            } else {
                // Duplicate numbering token within the subject: answers
                // attach to the row that won.
                tx.query_row(
                    "SELECT id FROM preguntas WHERE materia_id = ?1 AND numero = ?2",
                    params![materia_id, question.number],
                    |row| row.get(0),
                )?
            };

            for answer in &question.answers {
                let inserted = tx.execute(
                    "INSERT OR IGNORE INTO respuestas (pregunta_id, opcion, texto, es_correcta)
                     VALUES (?1, ?2, ?3, 0)",
                    params![pregunta_id, answer.option.to_string(), answer.text],
                )?;
                if inserted > 0 {
                    counts.respuestas += 1;
                }
            }
        }
    }

    tx.commit()?;
    Ok(counts)
}
