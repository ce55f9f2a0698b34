//! Pane manager: an ordered row of editors with a single focused pane.
//!
//! The manager owns the pane list and the focus index. Widths are always
//! `terminal_width / pane_count` (integer division); leftover columns stay
//! unassigned.

use crossterm::event::KeyEvent;
use std::fmt;
use tracing::{debug, info};

use crate::config::{Config, ConfigError, InputPolicy, PaneLimits};
use crate::editor::Editor;
use crate::event::{Command, CommandOutcome, Event, Outcome};
use crate::keymap::Keymap;

/// Builds a fresh, blurred editor for a new pane.
pub type EditorFactory<E> = Box<dyn FnMut() -> E + Send>;

/// Manages a dynamically sized row of editor panes.
pub struct PaneManager<E: Editor> {
    panes: Vec<E>,
    focus: usize,
    width: u16,
    height: u16,
    limits: PaneLimits,
    policy: InputPolicy,
    keymap: Keymap,
    quit: bool,
    factory: EditorFactory<E>,
}

impl<E: Editor> fmt::Debug for PaneManager<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneManager")
            .field("panes", &self.panes.len())
            .field("focus", &self.focus)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("limits", &self.limits)
            .field("policy", &self.policy)
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}

impl<E: Editor> PaneManager<E> {
    /// Create a manager with `limits.initial` panes, focusing the first.
    ///
    /// Fails if the initial count is outside `[min, max]` or `min` is zero.
    pub fn new(
        limits: PaneLimits,
        policy: InputPolicy,
        keymap: Keymap,
        mut factory: EditorFactory<E>,
    ) -> Result<Self, ConfigError> {
        limits.validate()?;

        let mut panes: Vec<E> = (0..limits.initial).map(|_| factory()).collect();
        for pane in &mut panes {
            pane.blur();
        }
        panes[0].focus();

        let mut manager = Self {
            panes,
            focus: 0,
            width: 0,
            height: 0,
            limits,
            policy,
            keymap,
            quit: false,
            factory,
        };
        manager.layout();
        Ok(manager)
    }

    /// Create a manager from a full config, validating key bindings too.
    pub fn from_config(config: &Config, factory: EditorFactory<E>) -> Result<Self, ConfigError> {
        let keymap = config.validate()?;
        Self::new(config.panes, config.input_policy, keymap, factory)
    }

    /// Dispatch one event.
    pub fn handle_event(&mut self, event: Event) -> Outcome {
        if self.quit {
            return Outcome::Ignored;
        }

        match event {
            Event::Resize(width, height) => {
                self.handle_resize(width, height);
                Outcome::Resized
            }
            Event::Key(key) => match self.keymap.classify(&key) {
                Some(Command::Quit) => {
                    self.handle_command(Command::Quit);
                    Outcome::Quit
                }
                Some(command) => match self.handle_command(command) {
                    CommandOutcome::Applied => Outcome::Command(command),
                    CommandOutcome::Disabled => Outcome::Disabled(command),
                },
                None => {
                    self.handle_input(&key);
                    Outcome::Forwarded
                }
            },
        }
    }

    /// Record a new terminal size and recompute pane widths.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "resize");
        self.width = width;
        self.height = height;
        self.layout();
    }

    /// Run a pane command.
    pub fn handle_command(&mut self, command: Command) -> CommandOutcome {
        if self.quit || !self.is_available(command) {
            debug!(%command, panes = self.panes.len(), "command disabled");
            return CommandOutcome::Disabled;
        }
        debug!(%command, "command");

        let len = self.panes.len();
        match command {
            Command::Next => self.set_focus((self.focus + 1) % len),
            Command::Prev => self.set_focus((self.focus + len - 1) % len),
            Command::Add => {
                let mut pane = (self.factory)();
                pane.blur();
                self.panes.push(pane);
                self.layout();
                info!(panes = self.panes.len(), "pane added");
            }
            Command::Remove => {
                self.panes.pop();
                let last = self.panes.len() - 1;
                if self.focus > last {
                    // The focused pane was the one dropped.
                    self.focus = last;
                    self.panes[last].focus();
                }
                self.layout();
                info!(panes = self.panes.len(), focus = self.focus, "pane removed");
            }
            Command::Quit => {
                for pane in &mut self.panes {
                    pane.blur();
                }
                self.quit = true;
            }
        }
        CommandOutcome::Applied
    }

    /// Route a non-command key according to the input policy.
    pub fn handle_input(&mut self, key: &KeyEvent) {
        if self.quit {
            return;
        }
        match self.policy {
            InputPolicy::FocusedOnly => self.panes[self.focus].handle_input(key),
            InputPolicy::Broadcast => {
                for pane in &mut self.panes {
                    pane.handle_input(key);
                }
            }
        }
    }

    /// Whether a new pane can be added.
    pub fn can_add(&self) -> bool {
        self.panes.len() < self.limits.max
    }

    /// Whether a pane can be removed.
    pub fn can_remove(&self) -> bool {
        self.panes.len() > self.limits.min
    }

    /// Whether a command would do anything right now.
    pub fn is_available(&self, command: Command) -> bool {
        match command {
            Command::Add => self.can_add(),
            Command::Remove => self.can_remove(),
            Command::Next | Command::Prev | Command::Quit => true,
        }
    }

    /// Width assigned to each pane.
    pub fn pane_width(&self) -> u16 {
        pane_width(self.width, self.panes.len())
    }

    /// Last known terminal size (width, height).
    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// Never true after construction.
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> &E {
        &self.panes[self.focus]
    }

    pub fn panes(&self) -> &[E] {
        &self.panes
    }

    pub fn limits(&self) -> PaneLimits {
        self.limits
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Whether `Quit` has been handled.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    // All focus changes go through here.
    fn set_focus(&mut self, index: usize) {
        if index == self.focus {
            return;
        }
        self.panes[self.focus].blur();
        self.focus = index;
        self.panes[index].focus();
    }

    fn layout(&mut self) {
        let width = self.pane_width();
        for pane in &mut self.panes {
            pane.set_width(width);
        }
    }
}

/// Equal share of `total` columns for `count` panes.
pub fn pane_width(total: u16, count: usize) -> u16 {
    match u16::try_from(count) {
        Ok(0) => 0,
        Ok(n) => total / n,
        Err(_) => 0,
    }
}
