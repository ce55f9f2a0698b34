//! Key chord parsing and command matching.
//!
//! Bindings are written as strings such as `"ctrl+n"` or `"shift+tab"` in
//! the config file and parsed once at startup into a [`Keymap`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::event::Command;

/// A single key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// Create a chord from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalized()
    }

    /// Parse a chord like `"ctrl+alt+x"`, `"shift+tab"` or `"f5"`.
    pub fn parse(chord: &str) -> Result<Self, KeymapError> {
        let lowered = chord.trim().to_ascii_lowercase();
        let unknown = || KeymapError::UnknownKey(chord.to_string());

        // A trailing "+" is the plus key itself ("ctrl++").
        let (mods_part, key_part) = if lowered == "+" {
            (None, "+")
        } else if let Some(prefix) = lowered.strip_suffix("++") {
            (Some(prefix), "+")
        } else {
            match lowered.rsplit_once('+') {
                Some((mods, key)) => (Some(mods), key),
                None => (None, lowered.as_str()),
            }
        };

        let mut modifiers = KeyModifiers::NONE;
        if let Some(mods) = mods_part {
            for m in mods.split('+') {
                modifiers |= match m {
                    "ctrl" | "control" => KeyModifiers::CONTROL,
                    "alt" | "meta" => KeyModifiers::ALT,
                    "shift" => KeyModifiers::SHIFT,
                    _ => return Err(unknown()),
                };
            }
        }

        let code = match key_part {
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            f if f.len() > 1 && f.starts_with('f') => {
                let n: u8 = f[1..].parse().map_err(|_| unknown())?;
                if !(1..=12).contains(&n) {
                    return Err(unknown());
                }
                KeyCode::F(n)
            }
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(unknown()),
                }
            }
        };

        Ok(Self::new(code, modifiers))
    }

    /// Check whether a key event triggers this chord.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let mut code = key.code;
        if let KeyCode::Char(c) = code {
            code = KeyCode::Char(c.to_ascii_lowercase());
        }
        *self == KeyChord::new(code, key.modifiers)
    }

    // Terminals disagree on whether SHIFT accompanies BackTab and shifted
    // characters, so it never takes part in the comparison for those.
    fn normalized(mut self) -> Self {
        if matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab) {
            self.modifiers.remove(KeyModifiers::SHIFT);
        }
        self
    }
}

/// Key strings per command, as stored in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_next")]
    pub next: Vec<String>,
    #[serde(default = "default_prev")]
    pub prev: Vec<String>,
    #[serde(default = "default_add")]
    pub add: Vec<String>,
    #[serde(default = "default_remove")]
    pub remove: Vec<String>,
    #[serde(default = "default_quit")]
    pub quit: Vec<String>,
}

fn default_next() -> Vec<String> {
    vec!["tab".into()]
}

fn default_prev() -> Vec<String> {
    vec!["shift+tab".into()]
}

fn default_add() -> Vec<String> {
    vec!["ctrl+n".into()]
}

fn default_remove() -> Vec<String> {
    vec!["ctrl+w".into()]
}

fn default_quit() -> Vec<String> {
    vec!["esc".into(), "ctrl+c".into()]
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next: default_next(),
            prev: default_prev(),
            add: default_add(),
            remove: default_remove(),
            quit: default_quit(),
        }
    }
}

impl KeyBindings {
    /// Key strings configured for a command.
    pub fn keys_for(&self, command: Command) -> &[String] {
        match command {
            Command::Next => &self.next,
            Command::Prev => &self.prev,
            Command::Add => &self.add,
            Command::Remove => &self.remove,
            Command::Quit => &self.quit,
        }
    }
}

/// A parsed binding for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub command: Command,
    pub chords: Vec<KeyChord>,
    /// Key label for the help bar (first configured key).
    pub help_key: String,
    /// Action label for the help bar.
    pub help_desc: &'static str,
}

impl KeyBinding {
    /// Check whether any chord of this binding matches the event.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.chords.iter().any(|chord| chord.matches(key))
    }
}

/// Parsed command bindings, passed to the pane manager at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Default for Keymap {
    fn default() -> Self {
        // The built-in strings always parse.
        Self::from_bindings(&KeyBindings::default()).unwrap_or(Self {
            bindings: Vec::new(),
        })
    }
}

impl Keymap {
    /// Parse configured key strings into a keymap.
    pub fn from_bindings(config: &KeyBindings) -> Result<Self, KeymapError> {
        let mut bindings: Vec<KeyBinding> = Vec::with_capacity(Command::ALL.len());

        for command in Command::ALL {
            let keys = config.keys_for(command);
            let Some(first) = keys.first() else {
                return Err(KeymapError::EmptyBinding(command));
            };

            let chords = keys
                .iter()
                .map(|k| KeyChord::parse(k))
                .collect::<Result<Vec<_>, _>>()?;

            for (key, chord) in keys.iter().zip(&chords) {
                if let Some(other) = bindings.iter().find(|b| b.chords.contains(chord)) {
                    return Err(KeymapError::Conflict {
                        key: key.trim().to_string(),
                        first: other.command,
                        second: command,
                    });
                }
            }

            bindings.push(KeyBinding {
                command,
                chords,
                help_key: first.trim().to_string(),
                help_desc: command.description(),
            });
        }

        Ok(Self { bindings })
    }

    /// Return the command bound to this key, if any.
    pub fn classify(&self, key: &KeyEvent) -> Option<Command> {
        self.bindings
            .iter()
            .find(|b| b.matches(key))
            .map(|b| b.command)
    }

    /// Bindings in help-bar order.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Binding for a specific command.
    pub fn binding(&self, command: Command) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.command == command)
    }
}

/// Errors from parsing key bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// A key string could not be parsed.
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// A command has no keys.
    #[error("No keys bound to {0}")]
    EmptyBinding(Command),

    /// Two commands share a key.
    #[error("Key {key:?} is bound to both {first} and {second}")]
    Conflict {
        key: String,
        first: Command,
        second: Command,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            KeyChord::parse("tab").unwrap(),
            KeyChord::new(KeyCode::Tab, KeyModifiers::NONE)
        );
        assert_eq!(
            KeyChord::parse("Esc").unwrap(),
            KeyChord::new(KeyCode::Esc, KeyModifiers::NONE)
        );
        assert_eq!(
            KeyChord::parse("f5").unwrap(),
            KeyChord::new(KeyCode::F(5), KeyModifiers::NONE)
        );
        assert_eq!(
            KeyChord::parse("space").unwrap(),
            KeyChord::new(KeyCode::Char(' '), KeyModifiers::NONE)
        );
    }

    #[test]
    fn test_parse_modifiers() {
        let chord = KeyChord::parse("ctrl+alt+x").unwrap();
        assert_eq!(chord.code, KeyCode::Char('x'));
        assert_eq!(chord.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);

        let plus = KeyChord::parse("ctrl++").unwrap();
        assert_eq!(plus.code, KeyCode::Char('+'));
        assert_eq!(plus.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let chord = KeyChord::parse("shift+tab").unwrap();
        assert_eq!(chord.code, KeyCode::BackTab);
        // Crossterm reports BackTab with and without SHIFT depending on platform
        assert!(chord.matches(&key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(chord.matches(&key(KeyCode::BackTab, KeyModifiers::NONE)));
        assert!(!chord.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            KeyChord::parse("hyper+x"),
            Err(KeymapError::UnknownKey("hyper+x".into()))
        );
        assert!(KeyChord::parse("f13").is_err());
        assert!(KeyChord::parse("nope").is_err());
        assert!(KeyChord::parse("").is_err());
    }

    #[test]
    fn test_matches_requires_modifiers() {
        let chord = KeyChord::parse("ctrl+n").unwrap();
        assert!(chord.matches(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!chord.matches(&key(KeyCode::Char('n'), KeyModifiers::NONE)));
        assert!(!chord.matches(&key(KeyCode::Char('n'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_default_keymap_classify() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.classify(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Command::Next)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Command::Prev)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Command::Add)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            Some(Command::Remove)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Command::Quit)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            keymap.classify(&key(KeyCode::Char('n'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_help_labels_use_first_key() {
        let keymap = Keymap::default();
        let labels: Vec<_> = keymap
            .bindings()
            .iter()
            .map(|b| (b.help_key.as_str(), b.help_desc))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("tab", "next"),
                ("shift+tab", "prev"),
                ("ctrl+n", "add an editor"),
                ("ctrl+w", "remove an editor"),
                ("esc", "quit"),
            ]
        );
    }

    #[test]
    fn test_conflicting_bindings_rejected() {
        let config = KeyBindings {
            add: vec!["tab".into()],
            ..KeyBindings::default()
        };
        assert_eq!(
            Keymap::from_bindings(&config),
            Err(KeymapError::Conflict {
                key: "tab".into(),
                first: Command::Next,
                second: Command::Add,
            })
        );
    }

    #[test]
    fn test_empty_binding_rejected() {
        let config = KeyBindings {
            quit: Vec::new(),
            ..KeyBindings::default()
        };
        assert_eq!(
            Keymap::from_bindings(&config),
            Err(KeymapError::EmptyBinding(Command::Quit))
        );
    }
}
