// src/infrastructure/rendering.rs
use crate::application::ports::render::{TextRenderer, ViewMode};
use crate::domain::node::{RichText, TextFormat};
use pulldown_cmark::{Event, Options, Parser, html};

/// Renders rich-text fields according to their text format.
#[derive(Debug, Clone)]
pub struct FormatTextRenderer {
    teaser_length: usize,
}

impl FormatTextRenderer {
    pub fn new(teaser_length: usize) -> Self {
        Self {
            teaser_length: teaser_length.max(1),
        }
    }
}

impl Default for FormatTextRenderer {
    fn default() -> Self {
        Self::new(600)
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escaped text with blank-line separated paragraphs and `<br />` for
/// single line breaks.
fn render_plain_text(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n");
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
        .into_iter()
        .map(|lines| {
            let body = lines
                .iter()
                .map(|line| escape_html(line))
                .collect::<Vec<_>>()
                .join("<br />\n");
            format!("<p>{body}</p>")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CommonMark with tables and strikethrough. Raw HTML in the source is
/// escaped rather than emitted.
fn render_markdown(value: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(value, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Cut `text` down to at most `size` characters, preferring to end on a
/// paragraph, then a sentence, then a word.
fn trim_to_summary(text: &str, size: usize) -> &str {
    if text.chars().count() <= size {
        return text;
    }

    let cut = text
        .char_indices()
        .nth(size)
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    let head = &text[..cut];

    let breakpoints: [&[&str]; 2] = [&["</p>", "\n\n"], &[". ", "! ", "? ", ".\n"]];
    for delimiters in breakpoints {
        let end = delimiters
            .iter()
            .filter_map(|delimiter| head.rfind(delimiter).map(|pos| pos + delimiter.len()))
            .max();
        if let Some(end) = end {
            let summary = head[..end].trim_end();
            if !summary.is_empty() {
                return summary;
            }
        }
    }

    match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => head[..pos].trim_end(),
        _ => head,
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Drop a tag left open by the cut and close every element still open at
/// the end of `fragment`.
fn balance_html(fragment: &str) -> String {
    let fragment = match (fragment.rfind('<'), fragment.rfind('>')) {
        (Some(open), Some(close)) if open > close => &fragment[..open],
        (Some(open), None) => &fragment[..open],
        _ => fragment,
    };
    let mut out = fragment.trim_end().to_string();

    let mut open_elements: Vec<String> = Vec::new();
    let mut rest = out.as_str();
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        if let Some(comment) = after.strip_prefix("!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }
        let Some(end) = after.find('>') else { break };
        let tag = after[..end].trim();
        rest = &after[end + 1..];

        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        if name.is_empty() || tag.ends_with('/') || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }

        if closing {
            if let Some(pos) = open_elements.iter().rposition(|open| *open == name) {
                open_elements.truncate(pos);
            }
        } else {
            open_elements.push(name);
        }
    }

    for name in open_elements.iter().rev() {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
    out
}

impl FormatTextRenderer {
    fn teaser(&self, text: &RichText) -> String {
        if let Some(summary) = &text.summary {
            return self.check_markup(summary, &text.format);
        }

        let trimmed = trim_to_summary(&text.value, self.teaser_length);
        match text.format {
            TextFormat::BasicHtml | TextFormat::FullHtml if trimmed.len() < text.value.len() => {
                self.check_markup(&balance_html(trimmed), &text.format)
            }
            _ => self.check_markup(trimmed, &text.format),
        }
    }
}

impl TextRenderer for FormatTextRenderer {
    fn check_markup(&self, value: &str, format: &TextFormat) -> String {
        if value.trim().is_empty() {
            return String::new();
        }

        match format {
            TextFormat::PlainText | TextFormat::Other(_) => render_plain_text(value),
            TextFormat::Markdown => render_markdown(value),
            TextFormat::BasicHtml | TextFormat::FullHtml => value.to_string(),
        }
    }

    fn render(&self, text: &RichText, mode: ViewMode) -> String {
        match mode {
            ViewMode::Full => self.check_markup(&text.value, &text.format),
            ViewMode::Teaser => self.teaser(text),
        }
    }
}
