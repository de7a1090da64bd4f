// src/domain/language.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_LANGCODE_LEN: usize = 12;

/// Language identifier used to select a translation of a node, e.g. `en`,
/// `fr` or `pt-br`. Stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Langcode(String);

impl Langcode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("langcode cannot be empty".into()));
        }

        let well_formed = trimmed.len() <= MAX_LANGCODE_LEN
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "invalid langcode: {trimmed}"
            )));
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Langcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Langcode> for String {
    fn from(value: Langcode) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: Langcode,
    pub name: String,
}

impl Language {
    pub fn new(code: Langcode, name: impl Into<String>) -> Self {
        let name = name.into();
        // an unnamed language falls back to its code
        let name = if name.trim().is_empty() {
            code.to_string()
        } else {
            name
        };
        Self { code, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn langcode_is_normalised_to_lowercase() {
        let code = Langcode::new(" PT-br ").unwrap();
        assert_eq!(code.as_str(), "pt-br");
    }

    #[test]
    fn langcode_rejects_empty_and_malformed_values() {
        assert!(Langcode::new("").is_err());
        assert!(Langcode::new("   ").is_err());
        assert!(Langcode::new("en;drop").is_err());
        assert!(Langcode::new("abcdefghijklmnop").is_err());
    }

    #[test]
    fn language_without_name_uses_code() {
        let lang = Language::new(Langcode::new("fr").unwrap(), "");
        assert_eq!(lang.name, "fr");
    }
}
