pub mod config;
mod embedded;
pub mod line;
mod normalize;
pub mod parser;

pub use config::{ListOverride, ParserConfig, ParserConfigBuilder, SubjectCasing, SubjectOverride};
pub use line::{LineKind, classify_line};
pub use parser::Parser;
// Re-export domain types from core (canonical definitions live there)
pub use bancoq_core::{Answer, Question, QuestionBank, Subject};

/// Parse a question bank text blob with the given configuration.
///
/// Pipeline:
/// 1. Classify each line (subject header, question header, lettered answer,
///    unlabeled bullet, continuation)
/// 2. Stitch the classified lines into subjects, questions, and answers
/// 3. For questions that gathered no answers, optionally split
///    bullet-delimited options embedded in the question text
pub fn parse_question_bank(text: &str, config: &ParserConfig) -> QuestionBank {
    Parser::with_config(config.clone()).parse(text)
}
