use super::LoadError;

/// Load text from the system clipboard.
pub fn load() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptySource("clipboard".to_string()));
    }

    Ok(text)
}
