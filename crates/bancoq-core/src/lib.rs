use serde::{Deserialize, Serialize};

/// Option letters, in order. The answer list of a question is hard-capped at
/// five options; anything past 'E' is rejected by [`next_option_letter`].
pub const OPTION_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// The letter following `last` in the bounded A–E sequence.
///
/// `None` input yields 'A'. Stepping past 'E', or starting from a letter
/// outside the table, yields `None` — the caller drops the option.
pub fn next_option_letter(last: Option<char>) -> Option<char> {
    match last {
        None => Some(OPTION_LETTERS[0]),
        Some(letter) => {
            let idx = OPTION_LETTERS.iter().position(|&l| l == letter)?;
            OPTION_LETTERS.get(idx + 1).copied()
        }
    }
}

/// A single multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Option letter, always uppercase A–E.
    #[serde(rename = "opcion")]
    pub option: char,
    #[serde(rename = "texto")]
    pub text: String,
}

/// One question of a subject.
///
/// `number` preserves the numbering token as it appeared in the source; it is
/// not required to be sequential or unique. `answers` may legitimately be
/// empty when no option lines could be recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "respuestas")]
    pub answers: Vec<Answer>,
}

/// A labeled question bank section and its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "materia")]
    pub name: String,
    #[serde(rename = "preguntas")]
    pub questions: Vec<Question>,
}

/// The complete extracted question bank plus derived counts.
///
/// Field names and nesting are a fixed wire contract consumed downstream;
/// do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(rename = "banco_preguntas")]
    pub subjects: Vec<Subject>,
    pub total_materias: usize,
    pub total_preguntas: usize,
}

impl QuestionBank {
    /// Build a bank from parsed subjects, deriving the summary counts.
    pub fn new(subjects: Vec<Subject>) -> Self {
        let total_materias = subjects.len();
        let total_preguntas = subjects.iter().map(|s| s.questions.len()).sum();
        Self {
            subjects,
            total_materias,
            total_preguntas,
        }
    }

    /// Serialize to the output JSON document (2-space indent, UTF-8 verbatim).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
