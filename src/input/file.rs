use std::fs;
use std::path::Path;

use super::LoadError;

/// Load plain text from a file, rejecting missing files and files with
/// no usable content.
pub fn load(path: &str) -> Result<String, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let content = fs::read_to_string(path_ref)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptySource(path.to_string()));
    }

    Ok(content)
}
