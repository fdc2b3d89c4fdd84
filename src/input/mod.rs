use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("source is empty: {0}")]
    EmptySource(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod clipboard;
pub mod file;
