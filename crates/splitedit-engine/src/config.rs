//! Configuration types for splitedit.
//!
//! This module defines the configuration schema: pane limits, input
//! routing, key bindings and editor appearance. Every field has a default
//! so a partial config file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::keymap::{KeyBindings, Keymap, KeymapError};

/// Main configuration for splitedit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// How many panes may exist.
    #[serde(default)]
    pub panes: PaneLimits,

    /// Where non-command input is routed.
    #[serde(default)]
    pub input_policy: InputPolicy,

    /// Key strings for each pane command.
    #[serde(default)]
    pub keys: KeyBindings,

    /// Editor widget settings.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,
}

/// Pane count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneLimits {
    /// Panes created at startup.
    #[serde(default = "default_initial")]
    pub initial: usize,

    /// Fewest panes allowed.
    #[serde(default = "default_min")]
    pub min: usize,

    /// Most panes allowed.
    #[serde(default = "default_max")]
    pub max: usize,
}

fn default_initial() -> usize {
    2
}

fn default_min() -> usize {
    1
}

fn default_max() -> usize {
    6
}

impl Default for PaneLimits {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            min: default_min(),
            max: default_max(),
        }
    }
}

impl PaneLimits {
    /// Check `1 <= min <= initial <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max || !(self.min..=self.max).contains(&self.initial) {
            return Err(ConfigError::PaneBounds {
                initial: self.initial,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Routing policy for input that is not a pane command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Only the focused pane receives input.
    #[default]
    FocusedOnly,
    /// Every pane receives input, focused or not.
    Broadcast,
}

/// Editor widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Text shown in an empty editor.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Draw a line-number gutter.
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Maximum characters per editor (0 = unlimited).
    #[serde(default)]
    pub char_limit: usize,
}

fn default_placeholder() -> String {
    "Type something".into()
}

fn default_show_line_numbers() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            show_line_numbers: default_show_line_numbers(),
            char_limit: 0,
        }
    }
}

/// Built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// High contrast for accessibility.
    HighContrast,
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "mocha" => Ok(Self::Mocha),
            "latte" => Ok(Self::Latte),
            "high_contrast" => Ok(Self::HighContrast),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default config file location (`<config dir>/splitedit/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("splitedit").join("config.json"))
    }

    /// Check pane limits and key bindings, returning the parsed keymap.
    pub fn validate(&self) -> Result<Keymap, ConfigError> {
        self.panes.validate()?;
        Ok(Keymap::from_bindings(&self.keys)?)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Pane limits are inconsistent.
    #[error("Invalid pane bounds: initial {initial} must be within min {min} and max {max} (min >= 1)")]
    PaneBounds {
        initial: usize,
        min: usize,
        max: usize,
    },

    /// Key bindings could not be parsed.
    #[error("Key binding error: {0}")]
    Keymap(#[from] KeymapError),
}
