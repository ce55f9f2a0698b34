//! Event handling for the splitedit TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use splitedit_engine::Event;
use std::time::Duration;
use tokio::sync::mpsc;

/// Event handler that reads terminal events on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler polling at the given interval.
    ///
    /// The poll interval only bounds how long the reader thread takes to
    /// notice that the handler was dropped; no events are synthesized.
    pub fn new(poll_interval_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let poll_interval = Duration::from_millis(poll_interval_ms);
            while !tx.is_closed() {
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                match event::read() {
                    Ok(evt) => {
                        if let Some(e) = convert_event(evt) {
                            if tx.send(e).is_err() {
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Get the next event, waiting until one is available.
    ///
    /// Returns `None` once the reader thread has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Convert a crossterm event into a pane manager event.
///
/// Key releases, mouse, focus and paste events are dropped.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
