//! Staging buffer for the comment panel.
//!
//! A render is built here first and handed to the sink in one piece, so a
//! failed fetch never leaves the panel half-cleared.

use crate::net::Comment;

/// Rendered comment lines, 1-indexed in the label text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPanel {
    lines: Vec<String>,
}

impl RenderedPanel {
    #[must_use]
    pub fn from_comments(comments: &[Comment]) -> Self {
        let lines = comments
            .iter()
            .enumerate()
            .map(|(i, comment)| format!("Comment {} is {}", i + 1, comment.as_str()))
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One `<p>` per line. Comment text is escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("<p>{}</p>", escape_html(line)))
            .collect()
    }
}

/// Escape text for insertion into HTML content or a quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
