//! splitedit-engine: Headless core for the splitedit split-pane editor
//!
//! This crate provides the terminal-independent logic, including:
//! - Configuration loading and validation
//! - Key chord parsing and command matching
//! - The `Editor` trait implemented by editor widgets
//! - The pane manager (focus cycling, add/remove, width layout, input routing)

pub mod config;
pub mod editor;
pub mod event;
pub mod keymap;
pub mod panes;

// Re-export commonly used types
pub use config::{Config, ConfigError, EditorConfig, InputPolicy, PaneLimits, ThemeName};
pub use editor::Editor;
pub use event::{Command, CommandOutcome, Event, Outcome};
pub use keymap::{KeyBinding, KeyBindings, KeyChord, Keymap, KeymapError};
pub use panes::{pane_width, EditorFactory, PaneManager};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
