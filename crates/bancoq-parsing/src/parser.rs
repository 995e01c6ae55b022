use tracing::debug;

use bancoq_core::{Answer, Question, QuestionBank, Subject, next_option_letter};

use crate::config::ParserConfig;
use crate::embedded::split_embedded_answers;
use crate::line::{LineKind, classify_line, clean_line, looks_like_answer, starts_with_bullet};
use crate::normalize::normalize_subject_name;

/// Line-oriented structural parser.
///
/// Consumes one text blob, classifies each line via [`classify_line`], and
/// stitches the results into a [`QuestionBank`]. Parsing never fails: the
/// rule cascade guarantees every line lands somewhere, with silent dropping
/// as the worst case. State lives in a per-call [`ParseState`], so one
/// `Parser` can serve any number of independent inputs.
pub struct Parser {
    config: ParserConfig,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Parser with the default (PDF profile) configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a newline-delimited text blob into a question bank.
    pub fn parse(&self, text: &str) -> QuestionBank {
        let lines: Vec<&str> = text.lines().collect();
        let mut state = ParseState::default();

        let mut i = 0;
        while i < lines.len() {
            let raw = lines[i];
            match classify_line(raw, &self.config) {
                LineKind::Blank => {}
                LineKind::SubjectHeader { name } => {
                    state.close_subject();
                    let name = normalize_subject_name(&name, &self.config);
                    debug!(subject = %name, "subject header");
                    state.open_subject = Some(Subject {
                        name,
                        questions: Vec::new(),
                    });
                }
                LineKind::QuestionHeader { number, mut inline } => {
                    state.close_question();
                    // A header with no inline text usually puts the question
                    // body on the next line; consume it unless that line is
                    // itself an answer.
                    if inline.is_empty()
                        && let Some(next) = lines.get(i + 1)
                    {
                        let next_clean = clean_line(next);
                        if !next_clean.is_empty()
                            && !looks_like_answer(next_clean)
                            && !starts_with_bullet(next)
                        {
                            inline = next_clean.to_string();
                            i += 1;
                        }
                    }
                    state.open_question = Some(Question {
                        number,
                        text: inline,
                        answers: Vec::new(),
                    });
                    state.open_answers.clear();
                }
                LineKind::LetteredAnswer { option, text } => {
                    // Dropped silently when no question is open.
                    if state.open_question.is_some() {
                        state.open_answers.push(Answer { option, text });
                    }
                }
                LineKind::BulletedAnswer { text } => {
                    if state.open_question.is_some()
                        && let Some(option) =
                            next_option_letter(state.open_answers.last().map(|a| a.option))
                    {
                        state.open_answers.push(Answer { option, text });
                    }
                    // Past 'E' the option is dropped: five is the cap.
                }
                LineKind::Text => {
                    state.append_continuation(raw, clean_line(raw));
                }
            }
            i += 1;
        }

        state.close_subject();

        let mut subjects = state.subjects;
        if self.config.embedded_answers {
            for subject in &mut subjects {
                for question in &mut subject.questions {
                    if question.answers.is_empty() {
                        split_embedded_answers(question);
                    }
                }
            }
        }

        let bank = QuestionBank::new(subjects);
        debug!(
            subjects = bank.total_materias,
            questions = bank.total_preguntas,
            "parse finished"
        );
        bank
    }
}

/// The mutable parse cursor: whatever is currently open, nothing more.
/// Reset per run, never shared.
#[derive(Debug, Default)]
struct ParseState {
    subjects: Vec<Subject>,
    open_subject: Option<Subject>,
    open_question: Option<Question>,
    open_answers: Vec<Answer>,
}

impl ParseState {
    /// Close the open question, attaching its accumulated answers. The
    /// question is appended to the open subject, or dropped when none is.
    fn close_question(&mut self) {
        if let Some(mut question) = self.open_question.take() {
            if !self.open_answers.is_empty() {
                question.answers = std::mem::take(&mut self.open_answers);
            }
            match self.open_subject.as_mut() {
                Some(subject) => subject.questions.push(question),
                None => debug!(number = %question.number, "question outside any subject dropped"),
            }
        }
        self.open_answers.clear();
    }

    /// Close the open subject (and its question). Subjects that gathered no
    /// questions are discarded, never emitted.
    fn close_subject(&mut self) {
        self.close_question();
        if let Some(subject) = self.open_subject.take() {
            if subject.questions.is_empty() {
                debug!(subject = %subject.name, "empty subject discarded");
            } else {
                self.subjects.push(subject);
            }
        }
    }

    /// Append continuation text to the last open answer, or to the question
    /// body when no answer is open yet. Lines that open with a bullet glyph
    /// are malformed option markers, not continuations, and are dropped —
    /// as is anything arriving before a question exists.
    fn append_continuation(&mut self, raw: &str, clean: &str) {
        let Some(question) = self.open_question.as_mut() else {
            return;
        };
        if starts_with_bullet(raw) {
            return;
        }
        let target = match self.open_answers.last_mut() {
            Some(answer) => &mut answer.text,
            None => &mut question.text,
        };
        if !target.is_empty() && !target.ends_with(|c: char| c.is_whitespace()) {
            target.push(' ');
        }
        target.push_str(clean);
    }
}
