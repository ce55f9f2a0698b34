//! Catppuccin color palettes for the TUI.

use ratatui::style::Color;
use splitedit_engine::ThemeName;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Editor
    pub cursor_line: Color,
    pub cursor_line_text: Color,
    pub line_number: Color,
    pub placeholder: Color,
    pub placeholder_focused: Color,
    pub end_of_buffer: Color,

    // Borders
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            cursor_line: Color::Rgb(69, 71, 90),          // #45475a
            cursor_line_text: Color::Rgb(245, 224, 220),  // #f5e0dc (rosewater)
            line_number: Color::Rgb(127, 132, 156),       // #7f849c
            placeholder: Color::Rgb(88, 91, 112),         // #585b70
            placeholder_focused: Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
            end_of_buffer: Color::Rgb(49, 50, 68),        // #313244

            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)

            cursor_line: Color::Rgb(204, 208, 218),        // #ccd0da
            cursor_line_text: Color::Rgb(76, 79, 105),     // #4c4f69
            line_number: Color::Rgb(140, 143, 161),        // #8c8fa1
            placeholder: Color::Rgb(172, 176, 190),        // #acb0be
            placeholder_focused: Color::Rgb(136, 57, 239), // #8839ef (mauve)
            end_of_buffer: Color::Rgb(220, 224, 232),      // #dce0e8

            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            cursor_line: Color::Blue,
            cursor_line_text: Color::White,
            line_number: Color::Yellow,
            placeholder: Color::Rgb(150, 150, 150),
            placeholder_focused: Color::Magenta,
            end_of_buffer: Color::Rgb(100, 100, 100),

            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.text, Color::Rgb(205, 214, 244)));
    }

    #[test]
    fn test_from_name() {
        assert!(matches!(
            Theme::from_name(ThemeName::Latte).text,
            Color::Rgb(76, 79, 105)
        ));
        assert!(matches!(
            Theme::from_name(ThemeName::HighContrast).border_focused,
            Color::Cyan
        ));
    }

    #[test]
    fn test_default_is_mocha() {
        assert!(matches!(
            Theme::default().primary,
            Color::Rgb(180, 190, 254)
        ));
    }
}
