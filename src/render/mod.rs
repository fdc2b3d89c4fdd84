//! Rendering styles for marked text.
//!
//! The highlight pass emits spans wrapped in abstract delimiters; this
//! module maps them onto one of the recognized output styles. Unknown
//! style names render as plain text with the markup stripped.

use crate::reading::highlight::{HL_CLOSE, HL_OPEN};

/// Recognized emphasis styles.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Style {
    /// Wrap the emphasized prefix in `<strong>` markup.
    Bold,
    /// Uppercase the emphasized prefix, no markers.
    Uppercase,
    /// Wrap the emphasized prefix in `**`.
    Asterisk,
}

impl Style {
    /// Parse a user-facing style name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bold" => Some(Style::Bold),
            "uppercase" => Some(Style::Uppercase),
            "asterisk" => Some(Style::Asterisk),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Uppercase => "uppercase",
            Style::Asterisk => "asterisk",
        }
    }
}

/// Rewrite every delimited span with `f`, dropping the delimiters.
/// An unterminated opening marker is passed through untouched.
pub fn map_spans<F>(marked: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(marked.len());
    let mut rest = marked;

    while let Some(open) = rest.find(HL_OPEN) {
        out.push_str(&rest[..open]);
        let after = &rest[open + HL_OPEN.len()..];
        match after.find(HL_CLOSE) {
            Some(close) => {
                out.push_str(&f(&after[..close]));
                rest = &after[close + HL_CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Apply a style to a marked string.
pub fn render(marked: &str, style: Style) -> String {
    match style {
        Style::Bold => map_spans(marked, |span| format!("<strong>{span}</strong>")),
        Style::Uppercase => map_spans(marked, |span| span.to_uppercase()),
        Style::Asterisk => map_spans(marked, |span| format!("**{span}**")),
    }
}

/// Drop the markup without applying any emphasis.
pub fn strip_markup(marked: &str) -> String {
    map_spans(marked, |span| span.to_string())
}
