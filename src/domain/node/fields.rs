// src/domain/node/fields.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Text format a rich-text value was authored in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    PlainText,
    Markdown,
    BasicHtml,
    FullHtml,
    Other(String),
}

impl TextFormat {
    pub fn from_machine_name(name: &str) -> Self {
        match name {
            "plain_text" => TextFormat::PlainText,
            "markdown" => TextFormat::Markdown,
            "basic_html" => TextFormat::BasicHtml,
            "full_html" => TextFormat::FullHtml,
            other => TextFormat::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TextFormat::PlainText => "plain_text",
            TextFormat::Markdown => "markdown",
            TextFormat::BasicHtml => "basic_html",
            TextFormat::FullHtml => "full_html",
            TextFormat::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    pub value: String,
    pub summary: Option<String>,
    pub format: TextFormat,
}

impl RichText {
    pub fn new(value: impl Into<String>, format: TextFormat) -> Self {
        Self {
            value: value.into(),
            summary: None,
            format,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.summary = (!summary.trim().is_empty()).then_some(summary);
        self
    }
}

/// Reference to a stored image file plus its alternative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageField {
    uri: String,
    alt: String,
}

impl ImageField {
    pub fn new(uri: impl Into<String>, alt: impl Into<String>) -> DomainResult<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(DomainError::Validation("image uri cannot be empty".into()));
        }
        Ok(Self {
            uri,
            alt: alt.into(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }
}
