//! Event and command types for the pane manager.

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pane-management action bound to a command key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Focus the pane to the right, wrapping around.
    Next,
    /// Focus the pane to the left, wrapping around.
    Prev,
    /// Append a new editor.
    Add,
    /// Remove the last editor.
    Remove,
    /// Blur everything and stop.
    Quit,
}

impl Command {
    /// All commands, in the order the help bar lists them.
    pub const ALL: [Command; 5] = [
        Command::Next,
        Command::Prev,
        Command::Add,
        Command::Remove,
        Command::Quit,
    ];

    /// Short description shown in the help bar.
    pub fn description(self) -> &'static str {
        match self {
            Command::Next => "next",
            Command::Prev => "prev",
            Command::Add => "add an editor",
            Command::Remove => "remove an editor",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Next => "next",
            Command::Prev => "prev",
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Input delivered to the pane manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized (width, height).
    Resize(u16, u16),
}

/// Result of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed state.
    Applied,
    /// The command is disabled in the current state and did nothing.
    Disabled,
}

/// What the pane manager did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Widths were recomputed for a new terminal size.
    Resized,
    /// A command key was applied.
    Command(Command),
    /// A command key was recognized but is currently disabled.
    Disabled(Command),
    /// The key was passed on to editor panes.
    Forwarded,
    /// Quit was requested. The caller should stop its loop.
    Quit,
    /// The manager has already quit and dropped the event.
    Ignored,
}

impl Outcome {
    /// Whether the caller should stop processing events.
    pub fn is_quit(self) -> bool {
        matches!(self, Outcome::Quit)
    }
}
