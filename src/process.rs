//! The text-processing boundary: one request in, one rendered string out.

use thiserror::Error;

use crate::reading::highlight::highlight;
use crate::render::{self, Style};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProcessError {
    #[error("no text provided")]
    NoInput,
}

/// Run the highlight pass, keeping the abstract span markup.
///
/// Empty input is the only client error; any other string processes
/// fully.
pub fn process_marked(text: &str) -> Result<String, ProcessError> {
    if text.is_empty() {
        return Err(ProcessError::NoInput);
    }
    Ok(highlight(text))
}

/// Highlight and render in one step. `None` renders plain, matching the
/// behavior for unrecognized style names.
pub fn process_text(text: &str, style: Option<Style>) -> Result<String, ProcessError> {
    let marked = process_marked(text)?;
    Ok(match style {
        Some(style) => render::render(&marked, style),
        None => render::strip_markup(&marked),
    })
}
