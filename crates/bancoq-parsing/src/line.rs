use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParserConfig;

/// Bullet glyphs that decorate answer lines: the standard bullet plus the
/// private-use-area code point some PDF font encodings emit instead.
pub(crate) const BULLET_GLYPHS: [char; 2] = ['\u{2022}', '\u{F0B7}'];

/// Structural role of one input line.
///
/// Classification is a pure function of the line content; stitching the
/// roles into subjects and questions is the parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `Banco de Preguntas[:] [GENERADO] <name>` — captured name is raw,
    /// before normalization.
    SubjectHeader { name: String },
    /// `Pregunta <n> [text]` or `<n>. text` / `<n>) text`.
    QuestionHeader { number: String, inline: String },
    /// `A: text`, `b) text`, optionally bullet-decorated.
    LetteredAnswer { option: char, text: String },
    /// `• text` with no explicit option letter.
    BulletedAnswer { text: String },
    /// Continuation of the current question or answer.
    Text,
    /// Empty after stripping; never advances structural state.
    Blank,
}

static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Banco de Preguntas\s*:?\s*(.+)$").unwrap());

static QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Pregunta\s+(\d+)[:\s]*(.*)$").unwrap());

static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[.)]\s*(.+)$").unwrap());

static LETTERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\u{2022}\u{F0B7}]*([A-Ea-e])[:)]\s*(.+)$").unwrap());

static BULLET_ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[\u{2022}\u{F0B7}]\s+(.+)$").unwrap());

/// Matches lines that open a lettered answer, as seen by the question
/// look-ahead: a single uppercase letter followed by a colon.
static ANSWER_LOOKAHEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-E]:").unwrap());

/// Strip surrounding whitespace plus any leading bullet decoration.
pub(crate) fn clean_line(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches(|c: char| c.is_whitespace() || BULLET_GLYPHS.contains(&c))
}

/// Whether the raw line opens with a bullet glyph (ignoring indentation).
pub(crate) fn starts_with_bullet(raw: &str) -> bool {
    raw.trim_start().starts_with(BULLET_GLYPHS)
}

/// Whether a cleaned line would open a lettered answer (`A:` .. `E:`).
pub(crate) fn looks_like_answer(clean: &str) -> bool {
    ANSWER_LOOKAHEAD_RE.is_match(clean)
}

/// Classify one raw line. Rules are tried in strict priority order; the
/// first match wins, so a line is never two things at once.
pub fn classify_line(raw: &str, config: &ParserConfig) -> LineKind {
    let clean = clean_line(raw);
    if clean.is_empty() {
        return LineKind::Blank;
    }

    let subject_re = config.subject_header_re.as_ref().unwrap_or(&SUBJECT_RE);
    if let Some(caps) = subject_re.captures(clean) {
        return LineKind::SubjectHeader {
            name: caps[1].trim().to_string(),
        };
    }

    let question_re = config.question_header_re.as_ref().unwrap_or(&QUESTION_RE);
    let numbered_re = config
        .numbered_question_re
        .as_ref()
        .unwrap_or(&NUMBERED_RE);
    if let Some(caps) = question_re
        .captures(clean)
        .or_else(|| numbered_re.captures(clean))
    {
        return LineKind::QuestionHeader {
            number: caps[1].to_string(),
            inline: caps
                .get(2)
                .map(|m| m.as_str().trim())
                .unwrap_or("")
                .to_string(),
        };
    }

    let lettered_re = config.lettered_answer_re.as_ref().unwrap_or(&LETTERED_RE);
    if let Some(caps) = lettered_re.captures(clean) {
        let option = caps[1].chars().next().unwrap_or('A').to_ascii_uppercase();
        return LineKind::LetteredAnswer {
            option,
            text: caps[2].trim().to_string(),
        };
    }

    // Unlabeled bullet option. Matched against the raw line: the bullet was
    // stripped from `clean`, and a glyph without trailing whitespace is not
    // an option marker.
    if let Some(caps) = BULLET_ANSWER_RE.captures(raw) {
        return LineKind::BulletedAnswer {
            text: caps[1].trim().to_string(),
        };
    }

    LineKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> LineKind {
        classify_line(raw, &ParserConfig::pdf())
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t "), LineKind::Blank);
        assert_eq!(classify("  •  "), LineKind::Blank);
    }

    #[test]
    fn test_subject_header_variants() {
        for line in [
            "Banco de Preguntas: Matematicas",
            "Banco de preguntas Matematicas",
            "BANCO DE PREGUNTAS: MATEMATICAS",
            "• Banco de Preguntas: Matematicas",
        ] {
            match classify(line) {
                LineKind::SubjectHeader { name } => {
                    assert_eq!(name.to_uppercase(), "MATEMATICAS")
                }
                other => panic!("{:?} for {:?}", other, line),
            }
        }
    }

    #[test]
    fn test_subject_header_keeps_generado_token() {
        // The GENERADO token is stripped later, during name normalization.
        match classify("BANCO DE PREGUNTAS GENERADO FISICA") {
            LineKind::SubjectHeader { name } => assert_eq!(name, "GENERADO FISICA"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_question_header_with_inline_text() {
        match classify("Pregunta 3: Cuanto es 2+2?") {
            LineKind::QuestionHeader { number, inline } => {
                assert_eq!(number, "3");
                assert_eq!(inline, "Cuanto es 2+2?");
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_question_header_bare() {
        match classify("Pregunta 12") {
            LineKind::QuestionHeader { number, inline } => {
                assert_eq!(number, "12");
                assert!(inline.is_empty());
            }
            other => panic!("{:?}", other),
        }
        // Trailing colon with no text behaves the same.
        match classify("Pregunta 12:") {
            LineKind::QuestionHeader { number, inline } => {
                assert_eq!(number, "12");
                assert!(inline.is_empty());
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_question_header_numbered() {
        match classify("7. Capital de Francia") {
            LineKind::QuestionHeader { number, inline } => {
                assert_eq!(number, "7");
                assert_eq!(inline, "Capital de Francia");
            }
            other => panic!("{:?}", other),
        }
        match classify("8) Otra pregunta") {
            LineKind::QuestionHeader { number, .. } => assert_eq!(number, "8"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_bare_number_without_text_is_not_a_question() {
        assert_eq!(classify("7."), LineKind::Text);
    }

    #[test]
    fn test_lettered_answers() {
        match classify("A: Paris") {
            LineKind::LetteredAnswer { option, text } => {
                assert_eq!(option, 'A');
                assert_eq!(text, "Paris");
            }
            other => panic!("{:?}", other),
        }
        match classify("c) Roma") {
            LineKind::LetteredAnswer { option, text } => {
                assert_eq!(option, 'C');
                assert_eq!(text, "Roma");
            }
            other => panic!("{:?}", other),
        }
        // Bullet decoration is stripped before matching.
        match classify("\u{F0B7} B: Londres") {
            LineKind::LetteredAnswer { option, .. } => assert_eq!(option, 'B'),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_letters_beyond_e_are_not_answers() {
        assert_eq!(classify("F: demasiado"), LineKind::Text);
    }

    #[test]
    fn test_bulleted_answer() {
        match classify("  • Paris") {
            LineKind::BulletedAnswer { text } => assert_eq!(text, "Paris"),
            other => panic!("{:?}", other),
        }
        match classify("\u{F0B7} Londres") {
            LineKind::BulletedAnswer { text } => assert_eq!(text, "Londres"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_bullet_without_space_is_continuation() {
        // A glyph glued to its text is not an option marker; the parser
        // drops these as malformed rather than appending them.
        assert_eq!(classify("•Paris"), LineKind::Text);
    }

    #[test]
    fn test_plain_text_is_continuation() {
        assert_eq!(classify("la respuesta depende del contexto"), LineKind::Text);
    }

    #[test]
    fn test_priority_subject_wins_over_question() {
        // A subject header that happens to contain digits stays a subject.
        match classify("Banco de Preguntas: 2025 Matematicas") {
            LineKind::SubjectHeader { name } => assert_eq!(name, "2025 Matematicas"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_custom_pattern_override() {
        let config = crate::ParserConfigBuilder::new()
            .subject_header_regex(r"(?i)^Tema\s*:\s*(.+)$")
            .build()
            .unwrap();
        match classify_line("Tema: Historia", &config) {
            LineKind::SubjectHeader { name } => assert_eq!(name, "Historia"),
            other => panic!("{:?}", other),
        }
        // The default phrase no longer matches.
        assert_eq!(
            classify_line("Banco de Preguntas: Historia", &config),
            LineKind::Text
        );
    }

    #[test]
    fn test_lookahead_helpers() {
        assert!(looks_like_answer("A: algo"));
        assert!(!looks_like_answer("a: algo"));
        assert!(!looks_like_answer("AB: algo"));
        assert!(starts_with_bullet("  • x"));
        assert!(starts_with_bullet("\u{F0B7} x"));
        assert!(!starts_with_bullet("x • y"));
    }
}
