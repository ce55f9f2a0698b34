//! Test utilities for splitedit-tui rendering and integration tests.
//!
//! This module provides helpers for creating pane managers, rendering them
//! into buffers, and converting buffers to strings for comparison.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use splitedit_engine::{Config, PaneLimits, PaneManager};

use crate::editor::EditorPane;
pub use crate::headless::buffer_to_string;
use crate::layout::render_to_buffer;
use crate::theme::{BorderSet, Theme};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a pane manager with default settings and `initial` panes.
pub fn create_test_manager(initial: usize) -> PaneManager<EditorPane> {
    let config = Config {
        panes: PaneLimits {
            initial,
            ..PaneLimits::default()
        },
        ..Config::default()
    };
    create_test_manager_with(&config)
}

/// Create a pane manager from a config.
pub fn create_test_manager_with(config: &Config) -> PaneManager<EditorPane> {
    let editor = config.editor.clone();
    PaneManager::from_config(config, Box::new(move || EditorPane::new(&editor)))
        .expect("Failed to create test manager")
}

/// Render the full layout for a manager and return it as a string.
pub fn render_manager_to_string(
    manager: &PaneManager<EditorPane>,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_to_buffer(area, &mut buffer, manager, &Theme::default(), &BorderSet::default());
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_manager() {
        let manager = create_test_manager(3);
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.focus_index(), 0);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
