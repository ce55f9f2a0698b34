//! One-line help bar listing the pane command keys.
//!
//! Format: `tab next • shift+tab prev • ctrl+n add an editor • ...`
//!
//! Commands that are currently disabled (add at the pane limit, remove at
//! the minimum) are drawn in the muted color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use splitedit_engine::{Editor, PaneManager};

use crate::theme::Theme;

/// Separator between hints.
const SEPARATOR: &str = " • ";

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "tab", "ctrl+n").
    pub key: String,
    /// The action description (e.g., "next", "quit").
    pub action: String,
    /// Whether the action can run right now.
    pub enabled: bool,
}

impl KeyHint {
    /// Create a new enabled key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            enabled: true,
        }
    }

    /// Set whether the hint is enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Build hints from the manager's keymap and current command availability.
pub fn hints_for<E: Editor>(manager: &PaneManager<E>) -> Vec<KeyHint> {
    manager
        .keymap()
        .bindings()
        .iter()
        .map(|binding| {
            KeyHint::new(binding.help_key.clone(), binding.help_desc)
                .enabled(manager.is_available(binding.command))
        })
        .collect()
}

/// Help bar widget.
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.muted);
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, muted));
            }

            let (key_style, action_style) = if hint.enabled {
                (
                    Style::default().fg(self.theme.primary),
                    Style::default().fg(self.theme.subtext),
                )
            } else {
                (muted, muted)
            };
            spans.push(Span::styled(hint.key.as_str(), key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(hint.action.as_str(), action_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_manager};
    use splitedit_engine::Command;

    fn render(hints: &[KeyHint], width: u16) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(hints, &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_key_hint_builder() {
        let hint = KeyHint::new("tab", "next").enabled(false);
        assert_eq!(hint.key, "tab");
        assert_eq!(hint.action, "next");
        assert!(!hint.enabled);
    }

    #[test]
    fn test_default_hints_text() {
        let manager = create_test_manager(2);
        let hints = hints_for(&manager);
        insta::assert_snapshot!(
            buffer_to_string(&render(&hints, 90)),
            @"tab next • shift+tab prev • ctrl+n add an editor • ctrl+w remove an editor • esc quit"
        );
    }

    #[test]
    fn test_hints_follow_availability() {
        let mut manager = create_test_manager(1);
        let enabled: Vec<_> = hints_for(&manager).iter().map(|h| h.enabled).collect();
        assert_eq!(enabled, vec![true, true, true, false, true]);

        while manager.can_add() {
            manager.handle_command(Command::Add);
        }
        let enabled: Vec<_> = hints_for(&manager).iter().map(|h| h.enabled).collect();
        assert_eq!(enabled, vec![true, true, false, true, true]);
    }

    #[test]
    fn test_disabled_hint_is_muted() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("a", "on"), KeyHint::new("b", "off").enabled(false)];
        let buf = render(&hints, 20);

        // "a on • b off": key "a" at 0, key "b" at 7
        assert_eq!(buf.cell((0, 0)).unwrap().fg, theme.primary);
        assert_eq!(buf.cell((7, 0)).unwrap().symbol(), "b");
        assert_eq!(buf.cell((7, 0)).unwrap().fg, theme.muted);
        assert_eq!(buf.cell((9, 0)).unwrap().fg, theme.muted);
    }
}
