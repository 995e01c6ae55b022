use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ParserConfig, SubjectCasing, SubjectOverride};

/// Default fixed-name corrections. The source material carries one subject
/// whose header text varies enough that casing rules alone cannot recover
/// the intended name; it is pinned here rather than special-cased in code.
pub(crate) static DEFAULT_SUBJECT_OVERRIDES: Lazy<Vec<SubjectOverride>> = Lazy::new(|| {
    vec![SubjectOverride::new(
        "Inteligencia Artificial",
        "Inteligencia Artificial",
    )]
});

static GENERADO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^GENERADO\s+").unwrap());

/// Normalize a raw subject name captured from a header line: strip a leading
/// `GENERADO` token, apply the configured casing rule, then the fixed-name
/// override table.
pub(crate) fn normalize_subject_name(raw: &str, config: &ParserConfig) -> String {
    let name = GENERADO_RE.replace(raw.trim(), "");
    let name = name.trim();

    let name = match config.subject_casing {
        SubjectCasing::CapitalizeIfUpper => {
            if is_all_upper(name) && name.chars().count() > 1 {
                capitalize(name)
            } else {
                name.to_string()
            }
        }
        SubjectCasing::TitleCase => title_case(name),
    };

    for entry in config.subject_overrides.resolve(&DEFAULT_SUBJECT_OVERRIDES) {
        if name.contains(&entry.needle) {
            return entry.canonical;
        }
    }
    name
}

/// True when the string has at least one cased character and none of them
/// is lowercase.
fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// First character uppercased, everything else lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize each alphabetic run, lowercase the rest of it.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParserConfig, ParserConfigBuilder, SubjectCasing};

    #[test]
    fn test_capitalize_if_upper() {
        let config = ParserConfig::pdf();
        assert_eq!(normalize_subject_name("MATEMATICAS", &config), "Matematicas");
        // Mixed case passes through untouched.
        assert_eq!(
            normalize_subject_name("Redes y Comunicaciones", &config),
            "Redes y Comunicaciones"
        );
        // Single-character names stay as they are.
        assert_eq!(normalize_subject_name("A", &config), "A");
    }

    #[test]
    fn test_title_case_profile() {
        let config = ParserConfig::txt();
        assert_eq!(
            normalize_subject_name("base de datos", &config),
            "Base De Datos"
        );
        assert_eq!(
            normalize_subject_name("SISTEMAS OPERATIVOS", &config),
            "Sistemas Operativos"
        );
    }

    #[test]
    fn test_generado_token_stripped() {
        let pdf = ParserConfig::pdf();
        assert_eq!(normalize_subject_name("GENERADO FISICA", &pdf), "Fisica");
        assert_eq!(normalize_subject_name("generado Quimica", &pdf), "Quimica");
        // Only a leading token is stripped.
        assert_eq!(
            normalize_subject_name("Texto Generado Automaticamente", &pdf),
            "Texto Generado Automaticamente"
        );
    }

    #[test]
    fn test_fixed_name_override() {
        let config = ParserConfig::txt();
        assert_eq!(
            normalize_subject_name("GENERADO INTELIGENCIA ARTIFICIAL", &config),
            "Inteligencia Artificial"
        );
        assert_eq!(
            normalize_subject_name("inteligencia artificial II", &config),
            "Inteligencia Artificial"
        );
    }

    #[test]
    fn test_custom_override_entry() {
        let config = ParserConfigBuilder::new()
            .subject_casing(SubjectCasing::TitleCase)
            .add_subject_override(crate::SubjectOverride::new(
                "Base De Datos",
                "Bases de Datos",
            ))
            .build()
            .unwrap();
        assert_eq!(
            normalize_subject_name("BASE DE DATOS AVANZADA", &config),
            "Bases de Datos"
        );
    }

    #[test]
    fn test_accented_names() {
        let config = ParserConfig::pdf();
        assert_eq!(
            normalize_subject_name("PROGRAMACIÓN", &config),
            "Programación"
        );
    }
}
