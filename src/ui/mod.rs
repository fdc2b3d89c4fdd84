//! Terminal presentation for the REPL.

use crossterm::style::Stylize;

use crate::render::map_spans;

pub const BANNER: &str = "\
resaltador - Spanish syllable highlighter
Polysyllabic words get their first two letters emphasized, 3-letter
monosyllables their first letter, and of two consecutive 2-letter
monosyllables the first is emphasized. Type :h for help.";

/// Help shown for `:h`.
pub fn help_lines() -> Vec<String> {
    [
        ":h, :help      show this help",
        ":q, :quit      exit",
        ":style NAME    set the output style (bold, uppercase, asterisk)",
        "@PATH          highlight the contents of a text file",
        "@@             highlight the clipboard contents",
        "anything else  highlight the typed text",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Render a marked string for terminal display, spans in ANSI bold.
pub fn render_ansi(marked: &str) -> String {
    map_spans(marked, |span| span.bold().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ansi_bolds_spans() {
        let expected = format!("{}ol", "s".bold());
        assert_eq!(render_ansi("⟨hl⟩s⟨/hl⟩ol"), expected);
    }

    #[test]
    fn test_render_ansi_without_spans_is_identity() {
        assert_eq!(render_ansi("la luz"), "la luz");
    }

    #[test]
    fn test_help_lines_not_empty() {
        assert!(!help_lines().is_empty());
    }
}
