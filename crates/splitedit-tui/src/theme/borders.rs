//! Border sets for focused and blurred panes.
//!
//! A blurred pane keeps a border made of spaces so every pane has the same
//! inner area whether or not it is focused. `NO_COLOR` switches to ASCII.

use ratatui::symbols::border;

/// Character set used for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Rounded Unicode box drawing (default).
    #[default]
    Unicode,
    /// ASCII-only fallback, also used with `NO_COLOR`.
    Ascii,
}

impl BorderMode {
    /// Pick a mode from the environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

const HIDDEN: border::Set = border::Set {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_top: " ",
    horizontal_bottom: " ",
};

const ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Border set based on border mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: BorderMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(BorderMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: BorderMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> BorderMode {
        self.mode
    }

    /// Focused borders - rounded for Unicode, `+-|` for ASCII.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            BorderMode::Unicode => border::ROUNDED,
            BorderMode::Ascii => ASCII,
        }
    }

    /// Blurred borders - blank in every mode.
    pub fn blurred(&self) -> border::Set {
        HIDDEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(BorderSet::default().mode(), BorderMode::Unicode);
    }

    #[test]
    fn test_unicode_borders() {
        let borders = BorderSet::new(BorderMode::Unicode);
        assert_eq!(borders.focused().top_left, "╭");
        assert_eq!(borders.blurred().top_left, " ");
    }

    #[test]
    fn test_ascii_borders() {
        let borders = BorderSet::new(BorderMode::Ascii);
        assert_eq!(borders.focused().top_left, "+");
        assert_eq!(borders.focused().horizontal_top, "-");
        assert_eq!(borders.blurred().vertical_left, " ");
    }
}
