use once_cell::sync::Lazy;
use regex::Regex;

use bancoq_core::{Answer, Question, next_option_letter};

/// One bullet-delimited run inside accumulated question text: the glyph,
/// whitespace, then everything up to the next glyph or end of text.
static EMBEDDED_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{2022}\u{F0B7}]\s+([^\u{2022}\u{F0B7}]+)").unwrap());

/// Minimum run length (in characters, after trimming) for a run to count as
/// an answer rather than stray marker noise.
const MIN_ANSWER_CHARS: usize = 3;

/// Split bullet-delimited answers out of a question's accumulated text.
///
/// Only called for questions that finished the main parse with zero answers:
/// their options never appeared on their own lines, so the whole block was
/// swallowed as question text. Runs are labeled A–E in order of appearance,
/// capped at five. When at least one answer is extracted the question text is
/// rewritten to whatever remains once every bullet run is removed; with no
/// usable runs the question is left untouched.
pub(crate) fn split_embedded_answers(question: &mut Question) {
    let mut answers: Vec<Answer> = Vec::new();
    for caps in EMBEDDED_RUN_RE.captures_iter(&question.text) {
        let text = caps[1].trim();
        if text.chars().count() < MIN_ANSWER_CHARS {
            continue;
        }
        let Some(option) = next_option_letter(answers.last().map(|a| a.option)) else {
            break;
        };
        answers.push(Answer {
            option,
            text: text.to_string(),
        });
    }

    if answers.is_empty() {
        return;
    }

    question.text = EMBEDDED_RUN_RE
        .replace_all(&question.text, "")
        .trim()
        .to_string();
    question.answers = answers;
}
