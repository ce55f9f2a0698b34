//! splitedit-tui: Terminal UI for the splitedit split-pane editor
//!
//! This crate provides the TUI layer for splitedit, including:
//! - The multi-line editor widget used in each pane
//! - Themes and focused/blurred border styles
//! - The help bar and full-screen layout
//! - Headless mode for testing and automation

mod editor;
mod event;
pub mod headless;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use editor::{EditorPane, EditorView, TextBuffer};
pub use event::{convert_event, EventHandler};
pub use layout::{pane_rects, render_app, render_to_buffer, HELP_HEIGHT};
pub use splitedit_engine;
pub use theme::{BorderMode, BorderSet, Theme};
pub use widgets::{hints_for, HelpBar, KeyHint};

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use splitedit_engine::{Config, Outcome, PaneManager};
use std::io::{self, stdout};

/// Poll interval for the terminal reader thread.
const POLL_INTERVAL_MS: u64 = 250;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// The config is validated before the terminal is touched, so a bad
/// config never leaves the screen in raw mode. The loop ends on a quit
/// key or when the terminal stops producing events.
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let editor = config.editor.clone();
    let mut manager =
        PaneManager::from_config(config, Box::new(move || EditorPane::new(&editor)))?;

    let theme = Theme::from_name(config.theme);
    let borders = BorderSet::new(BorderMode::from_env());

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Seed the layout; later sizes arrive as resize events
    let size = terminal.size()?;
    manager.handle_resize(size.width, size.height);

    let mut events = EventHandler::new(POLL_INTERVAL_MS);

    let result = run_loop(&mut terminal, &mut manager, &theme, &borders, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &mut PaneManager<EditorPane>,
    theme: &Theme,
    borders: &BorderSet,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render_app(frame, manager, theme, borders))?;

        let Some(event) = events.next().await else {
            tracing::warn!("terminal event stream closed");
            break;
        };

        if manager.handle_event(event) == Outcome::Quit {
            tracing::info!(panes = manager.len(), "quit");
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_engine_reexport() {
        assert_eq!(splitedit_engine::engine_version(), tui_version());
    }
}
