use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:style NAME` → SetStyle command
/// - `@filename` → Load file command, `@@` → clipboard
/// - Anything else → Process the line as text
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(String::new());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.splitn(2, char::is_whitespace);
        return match (parts.next().unwrap_or(""), parts.next()) {
            ("q", None) | ("quit", None) => ReplCommand::Quit,
            ("h", None) | ("help", None) => ReplCommand::Help,
            ("style", Some(name)) if !name.trim().is_empty() => {
                ReplCommand::SetStyle(name.trim().to_string())
            }
            _ => ReplCommand::Unknown(input.to_string()),
        };
    }

    if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        return if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        };
    }

    ReplCommand::Process(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_set_style() {
        assert_eq!(
            parse_repl_input(":style bold"),
            ReplCommand::SetStyle("bold".to_string())
        );
        assert_eq!(
            parse_repl_input(":style   asterisk  "),
            ReplCommand::SetStyle("asterisk".to_string())
        );
    }

    #[test]
    fn test_parse_set_style_without_name_is_unknown() {
        assert!(matches!(parse_repl_input(":style"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":style  "), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_repl_input("@texto.txt"),
            ReplCommand::LoadFile("texto.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_repl_input("@  texto.txt"),
            ReplCommand::LoadFile("texto.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_repl_input("@@"), ReplCommand::LoadClipboard);
        assert_eq!(parse_repl_input("@"), ReplCommand::LoadClipboard);
    }

    #[test]
    fn test_parse_free_text_is_processed() {
        assert_eq!(
            parse_repl_input("la luz del sol"),
            ReplCommand::Process("la luz del sol".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_colon_command() {
        assert!(matches!(parse_repl_input(":x"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":q now"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_repl_input(""), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input("   "), ReplCommand::Unknown(_)));
    }
}
