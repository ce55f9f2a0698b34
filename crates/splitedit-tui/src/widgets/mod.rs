//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`HelpBar`] - Bottom command-key hints with disabled commands grayed out

mod help_bar;

pub use help_bar::{hints_for, HelpBar, KeyHint};
