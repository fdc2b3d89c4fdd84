use crate::app::AppEvent;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the application
    Quit,

    /// Show help information
    Help,

    /// Switch the output style
    SetStyle(String),

    /// Highlight the contents of a text file
    LoadFile(String),

    /// Highlight the clipboard contents
    LoadClipboard,

    /// Highlight free text typed at the prompt
    Process(String),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
///
/// This is the translation layer between REPL input and App core.
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::SetStyle(name) => AppEvent::SetStyle(name),
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::Process(text) => AppEvent::Process(text),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
