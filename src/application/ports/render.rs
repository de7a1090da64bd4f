// src/application/ports/render.rs
use crate::domain::node::{RichText, TextFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Full,
    Teaser,
}

pub trait TextRenderer: Send + Sync {
    /// Run `value` through the filters of `format`, producing HTML.
    fn check_markup(&self, value: &str, format: &TextFormat) -> String;

    /// Render a rich-text field for display in `mode`.
    fn render(&self, text: &RichText, mode: ViewMode) -> String;
}
