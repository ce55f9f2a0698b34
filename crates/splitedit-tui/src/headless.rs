//! Headless mode for the splitedit TUI.
//!
//! This module runs the pane manager against a `TestBackend` instead of a
//! real terminal, enabling E2E testing and automation. Events are sent via
//! a channel and state is captured after each render.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use splitedit_engine::{Config, ConfigError, Editor, Event, PaneManager};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::editor::EditorPane;
use crate::layout::render_app;
use crate::theme::{BorderMode, BorderSet, Theme};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Number of panes.
    pub pane_count: usize,
    /// Index of the focused pane.
    pub focus: usize,
    /// Width of each pane.
    pub widths: Vec<u16>,
    /// Text of each pane.
    pub texts: Vec<String>,
    /// Whether Add and Remove are enabled.
    pub can_add: bool,
    pub can_remove: bool,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI has quit.
    pub should_quit: bool,
    /// Events processed so far.
    pub events_handled: usize,
}

impl HeadlessState {
    fn capture(manager: &PaneManager<EditorPane>, screen_contents: String, events: usize) -> Self {
        Self {
            pane_count: manager.len(),
            focus: manager.focus_index(),
            widths: manager.panes().iter().map(Editor::width).collect(),
            texts: manager.panes().iter().map(EditorPane::text).collect(),
            can_add: manager.can_add(),
            can_remove: manager.can_remove(),
            screen_contents,
            should_quit: manager.is_quit(),
            events_handled: events,
        }
    }
}

/// Handle to control a headless TUI instance.
///
/// Use this to send events and observe state changes.
pub struct HeadlessHandle {
    event_tx: mpsc::UnboundedSender<Event>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an event to the TUI.
    ///
    /// Returns `true` if the event was sent successfully.
    pub fn send_event(&self, event: Event) -> bool {
        self.event_tx.send(event).is_ok()
    }

    /// Send a key press.
    pub fn send_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.send_event(Event::Key(KeyEvent::new(code, modifiers)))
    }

    /// Type each character of a string as a key press.
    pub fn type_str(&self, text: &str) -> bool {
        text.chars().all(|c| {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            self.send_key(code, KeyModifiers::NONE)
        })
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the loop finished without meeting the condition
                Ok(Err(_)) | Err(_) => {
                    let state = self.state();
                    return condition(&state).then_some(state);
                }
            }
        }
    }

    /// Wait until `count` events have been processed.
    pub async fn wait_for_events(
        &mut self,
        count: usize,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        self.wait_for(|s| s.events_handled >= count, timeout).await
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Run the TUI in headless mode.
///
/// Fails up front if the config is invalid. Otherwise returns a handle to
/// control the TUI and a join handle for the background task, which ends
/// after a quit key or when the handle is dropped.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) = run_tui_headless(&Config::default(), HeadlessConfig::default())?;
///
/// handle.send_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
/// let state = handle.wait_for(|s| s.pane_count == 3, Duration::from_secs(1)).await;
///
/// handle.send_key(KeyCode::Esc, KeyModifiers::NONE);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    config: &Config,
    headless: HeadlessConfig,
) -> Result<(HeadlessHandle, JoinHandle<Result<(), String>>), ConfigError> {
    let editor = config.editor.clone();
    let mut manager =
        PaneManager::from_config(config, Box::new(move || EditorPane::new(&editor)))?;
    manager.handle_resize(headless.width, headless.height);

    let theme = Theme::from_name(config.theme);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(manager, theme, headless, event_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle { event_tx, state_rx };
    Ok((handle, task))
}

async fn run_headless_loop(
    mut manager: PaneManager<EditorPane>,
    theme: Theme,
    config: HeadlessConfig,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut terminal = Terminal::new(TestBackend::new(config.width, config.height))?;
    let borders = BorderSet::new(BorderMode::Unicode);
    let mut events_handled = 0;

    loop {
        terminal.draw(|frame| render_app(frame, &manager, &theme, &borders))?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let _ = state_tx.send(HeadlessState::capture(&manager, screen_contents, events_handled));

        if manager.is_quit() {
            break;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };

        if let Event::Resize(width, height) = event {
            terminal.backend_mut().resize(width, height);
        }
        manager.handle_event(event);
        events_handled += 1;
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
///
/// Trailing whitespace is trimmed from each line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
