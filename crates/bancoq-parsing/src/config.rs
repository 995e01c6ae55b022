use regex::Regex;

/// Controls how a list of patterns/values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// How a recognized subject name has its casing normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectCasing {
    /// All-uppercase names longer than one character become `Capitalized`
    /// (first letter upper, rest lower). Mixed-case names pass through.
    CapitalizeIfUpper,
    /// Every word is capitalized.
    TitleCase,
}

/// A fixed-name correction applied after casing: any normalized name that
/// contains `needle` is rewritten to `canonical` wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectOverride {
    pub needle: String,
    pub canonical: String,
}

impl SubjectOverride {
    pub fn new(needle: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            canonical: canonical.into(),
        }
    }
}

/// Configuration for the structural parser.
///
/// One parser serves both historical input flavors; the differences between
/// them (subject casing, the embedded-answer pass, the fixed-name table) are
/// carried here. All regex fields are `Option<Regex>` — `None` means "use the
/// built-in default". Use [`ParserConfigBuilder`] to construct from string
/// patterns.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub(crate) subject_casing: SubjectCasing,
    /// Whether questions that end up with zero answers get the
    /// embedded-answer splitting pass.
    pub(crate) embedded_answers: bool,
    /// Fixed-name corrections applied after casing normalization.
    pub(crate) subject_overrides: ListOverride<SubjectOverride>,
    /// Regex for the subject heading phrase.
    pub(crate) subject_header_re: Option<Regex>,
    /// Regex for `Pregunta <n>` question headers.
    pub(crate) question_header_re: Option<Regex>,
    /// Regex for bare `1.` / `1)` question headers.
    pub(crate) numbered_question_re: Option<Regex>,
    /// Regex for `A:` / `a)` lettered answer lines.
    pub(crate) lettered_answer_re: Option<Regex>,
}

impl ParserConfig {
    /// Profile for PDF-extracted text: uppercase-only subject names are
    /// capitalized, and questions without recognized answer lines get the
    /// embedded-answer splitting pass.
    pub fn pdf() -> Self {
        Self {
            subject_casing: SubjectCasing::CapitalizeIfUpper,
            embedded_answers: true,
            subject_overrides: ListOverride::Default,
            subject_header_re: None,
            question_header_re: None,
            numbered_question_re: None,
            lettered_answer_re: None,
        }
    }

    /// Profile for raw TXT dumps: subject names are title-cased and the
    /// embedded-answer pass is skipped.
    pub fn txt() -> Self {
        Self {
            subject_casing: SubjectCasing::TitleCase,
            embedded_answers: false,
            ..Self::pdf()
        }
    }

    pub fn subject_casing(&self) -> SubjectCasing {
        self.subject_casing
    }

    pub fn embedded_answers(&self) -> bool {
        self.embedded_answers
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::pdf()
    }
}

/// Builder for [`ParserConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in
/// [`build()`](Self::build). Fails fast with `regex::Error` if any pattern is
/// invalid.
#[derive(Debug, Clone)]
pub struct ParserConfigBuilder {
    subject_casing: SubjectCasing,
    embedded_answers: bool,
    subject_overrides: ListOverride<SubjectOverride>,
    subject_header_re: Option<String>,
    question_header_re: Option<String>,
    numbered_question_re: Option<String>,
    lettered_answer_re: Option<String>,
}

impl Default for ParserConfigBuilder {
    fn default() -> Self {
        Self {
            subject_casing: SubjectCasing::CapitalizeIfUpper,
            embedded_answers: true,
            subject_overrides: ListOverride::Default,
            subject_header_re: None,
            question_header_re: None,
            numbered_question_re: None,
            lettered_answer_re: None,
        }
    }
}

impl ParserConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject_casing(mut self, casing: SubjectCasing) -> Self {
        self.subject_casing = casing;
        self
    }

    pub fn embedded_answers(mut self, enabled: bool) -> Self {
        self.embedded_answers = enabled;
        self
    }

    // ── Subject-name override table ──

    pub fn set_subject_overrides(mut self, overrides: Vec<SubjectOverride>) -> Self {
        self.subject_overrides = ListOverride::Replace(overrides);
        self
    }

    pub fn add_subject_override(mut self, entry: SubjectOverride) -> Self {
        match &mut self.subject_overrides {
            ListOverride::Extend(v) => v.push(entry),
            _ => self.subject_overrides = ListOverride::Extend(vec![entry]),
        }
        self
    }

    // ── Pattern overrides ──

    pub fn subject_header_regex(mut self, pattern: &str) -> Self {
        self.subject_header_re = Some(pattern.to_string());
        self
    }

    pub fn question_header_regex(mut self, pattern: &str) -> Self {
        self.question_header_re = Some(pattern.to_string());
        self
    }

    pub fn numbered_question_regex(mut self, pattern: &str) -> Self {
        self.numbered_question_re = Some(pattern.to_string());
        self
    }

    pub fn lettered_answer_regex(mut self, pattern: &str) -> Self {
        self.lettered_answer_re = Some(pattern.to_string());
        self
    }

    /// Compile all string patterns and produce a [`ParserConfig`].
    pub fn build(self) -> Result<ParserConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        Ok(ParserConfig {
            subject_casing: self.subject_casing,
            embedded_answers: self.embedded_answers,
            subject_overrides: self.subject_overrides,
            subject_header_re: compile(self.subject_header_re)?,
            question_header_re: compile(self.question_header_re)?,
            numbered_question_re: compile(self.numbered_question_re)?,
            lettered_answer_re: compile(self.lettered_answer_re)?,
        })
    }
}
