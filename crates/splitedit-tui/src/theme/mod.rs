//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`BorderSet`] - Focused and blurred pane borders with ASCII fallback

mod borders;
mod colors;

pub use borders::{BorderMode, BorderSet};
pub use colors::Theme;
