//! REPL (Read-Eval-Print Loop) module
//!
//! Provides REPL input parsing and the line loop.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes

pub mod command;
pub mod parser;

pub use command::ReplCommand;

use std::io::{self, BufRead, Write};

use crate::app::{App, AppMode};
use crate::ui;

/// Run the line REPL until the user quits or stdin closes.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", ui::BANNER)?;

    let mut line = String::new();
    loop {
        if app.mode == AppMode::Quit {
            break;
        }

        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let command = parser::parse_repl_input(&line);
        let event = command::command_to_app_event(command);
        for output in app.handle_event(event) {
            writeln!(stdout, "{output}")?;
        }
    }

    Ok(())
}
