use super::event::AppEvent;
use super::mode::AppMode;
use crate::input;
use crate::process;
use crate::render::{self, Style};
use crate::ui;

/// Application core: owns the active output style and the REPL
/// lifecycle. Event handling returns the lines to print so the loop
/// stays free of presentation decisions.
pub struct App {
    pub mode: AppMode,
    style: Option<Style>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Repl,
            style: Some(Style::Bold),
        }
    }

    /// The active style; `None` renders plain text.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    /// Handle one event and return the lines to print.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<String> {
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Vec::new()
            }
            AppEvent::Help => ui::help_lines(),
            AppEvent::SetStyle(name) => self.set_style(&name),
            AppEvent::Process(text) => self.process(&text),
            AppEvent::LoadFile(path) => match input::file::load(&path) {
                Ok(text) => self.process(&text),
                Err(err) => vec![format!("error: {err}")],
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(text) => self.process(&text),
                Err(err) => vec![format!("error: {err}")],
            },
            AppEvent::InvalidCommand(command) => {
                if command.is_empty() {
                    vec!["enter text to highlight, or :h for help".to_string()]
                } else {
                    vec![format!("unrecognized command: {command} (try :h)")]
                }
            }
        }
    }

    fn set_style(&mut self, name: &str) -> Vec<String> {
        self.style = Style::parse(name);
        match self.style {
            Some(style) => vec![format!("style set to {}", style.name())],
            None => vec![format!("unknown style '{name}', output will be unstyled")],
        }
    }

    fn process(&self, text: &str) -> Vec<String> {
        match process::process_marked(text) {
            Ok(marked) => {
                // Bold is shown with ANSI emphasis in the terminal; the
                // <strong> form of the same style is for callers of
                // process_text
                let line = match self.style {
                    Some(Style::Bold) => ui::render_ansi(&marked),
                    Some(style) => render::render(&marked, style),
                    None => render::strip_markup(&marked),
                };
                vec![line]
            }
            Err(err) => vec![format!("error: {err}")],
        }
    }
}
