//! Editor pane: a text buffer that implements the engine's [`Editor`] trait.
//!
//! Supports focused/blurred states with different border and cursor-line styles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use splitedit_engine::{Editor, EditorConfig};
use unicode_width::UnicodeWidthChar;

use super::buffer::TextBuffer;
use crate::theme::{BorderSet, Theme};

/// Width of the `{:>3} ` line-number gutter.
const GUTTER_WIDTH: u16 = 4;

/// One editor in the pane row.
#[derive(Debug, Clone)]
pub struct EditorPane {
    buffer: TextBuffer,
    focused: bool,
    width: u16,
    placeholder: String,
    show_line_numbers: bool,
}

impl EditorPane {
    /// Create a blurred, empty editor.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::new(config.char_limit),
            focused: false,
            width: 0,
            placeholder: config.placeholder.clone(),
            show_line_numbers: config.show_line_numbers,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The editor's text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Create a widget that draws this editor.
    pub fn view<'a>(&'a self, theme: &'a Theme, borders: &'a BorderSet) -> EditorView<'a> {
        EditorView {
            pane: self,
            theme,
            borders,
        }
    }
}

impl Editor for EditorPane {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn width(&self) -> u16 {
        self.width
    }

    // Input is accepted whether or not the pane is focused; routing is the
    // pane manager's job.
    fn handle_input(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('h') if ctrl => self.buffer.backspace(),
            KeyCode::Char('a') if ctrl => self.buffer.move_home(),
            KeyCode::Char('e') if ctrl => self.buffer.move_end(),
            KeyCode::Char(c) if !ctrl && !alt => {
                self.buffer.insert(c);
            }
            KeyCode::Enter => {
                self.buffer.newline();
            }
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Up => self.buffer.move_up(),
            KeyCode::Down => self.buffer.move_down(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            _ => {}
        }
    }
}

/// Widget that renders an [`EditorPane`].
pub struct EditorView<'a> {
    pane: &'a EditorPane,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pane = self.pane;
        let theme = self.theme;

        let block = if pane.focused {
            Block::default()
                .borders(Borders::ALL)
                .border_set(self.borders.focused())
                .border_style(Style::default().fg(theme.border_focused))
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_set(self.borders.blurred())
        };

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let lines = pane.buffer.lines();
        let (cursor_row, cursor_col) = pane.buffer.cursor();
        let height = usize::from(inner.height);
        // Keep the cursor row on screen
        let top = (cursor_row + 1).saturating_sub(height);

        // Keep the cursor column on screen; every row shares the offset
        let gutter = if pane.show_line_numbers {
            GUTTER_WIDTH.min(inner.width)
        } else {
            0
        };
        let text_width = usize::from(inner.width - gutter);
        let cursor_prefix = lines
            .get(cursor_row)
            .map_or(0, |line| display_width(line, cursor_col));
        let left = (cursor_prefix + 1).saturating_sub(text_width);

        for (offset, y) in (inner.y..inner.bottom()).enumerate() {
            let row = top + offset;
            let is_cursor_line = pane.focused && row == cursor_row;

            let line_style = if is_cursor_line {
                Style::default()
                    .fg(theme.cursor_line_text)
                    .bg(theme.cursor_line)
            } else {
                Style::default().fg(theme.text)
            };
            if is_cursor_line {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), line_style);
            }

            let Some(line) = lines.get(row) else {
                buf.set_string(
                    inner.x,
                    y,
                    "~",
                    Style::default().fg(theme.end_of_buffer),
                );
                continue;
            };

            let mut x = inner.x;
            if pane.show_line_numbers {
                let number = format!("{:>3} ", row + 1);
                let (next_x, _) = buf.set_stringn(
                    x,
                    y,
                    &number,
                    usize::from(GUTTER_WIDTH.min(inner.width)),
                    line_style.fg(theme.line_number),
                );
                x = next_x;
            }

            let remaining = usize::from(inner.right().saturating_sub(x));
            if pane.buffer.is_empty() {
                let color = if pane.focused {
                    theme.placeholder_focused
                } else {
                    theme.placeholder
                };
                buf.set_stringn(x, y, &pane.placeholder, remaining, line_style.fg(color));
            } else {
                buf.set_stringn(x, y, skip_columns(line, left), remaining, line_style);
            }

            if is_cursor_line {
                if let Ok(prefix) = u16::try_from(cursor_prefix.saturating_sub(left)) {
                    let cursor_x = x.saturating_add(prefix);
                    if cursor_x < inner.right() {
                        if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                            cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
                        }
                    }
                }
            }
        }
    }
}

/// Display width of the first `chars` characters of `line`.
fn display_width(line: &str, chars: usize) -> usize {
    line.chars()
        .take(chars)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// The rest of `line` after dropping `columns` display columns.
fn skip_columns(line: &str, columns: usize) -> &str {
    let mut skipped = 0;
    for (idx, c) in line.char_indices() {
        if skipped >= columns {
            return &line[idx..];
        }
        skipped += c.width().unwrap_or(0);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn pane() -> EditorPane {
        EditorPane::new(&EditorConfig::default())
    }

    fn press(pane: &mut EditorPane, code: KeyCode) {
        pane.handle_input(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(pane: &mut EditorPane, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                press(pane, KeyCode::Enter);
            } else {
                press(pane, KeyCode::Char(c));
            }
        }
    }

    fn render(pane: &EditorPane, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let borders = BorderSet::default();
        pane.view(&theme, &borders).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_new_pane_is_blurred_and_empty() {
        let pane = pane();
        assert!(!pane.is_focused());
        assert!(pane.buffer().is_empty());
        assert_eq!(pane.width(), 0);
    }

    #[test]
    fn test_typing_and_editing_keys() {
        let mut pane = pane();
        type_str(&mut pane, "hello\nworld");
        assert_eq!(pane.text(), "hello\nworld");

        press(&mut pane, KeyCode::Up);
        press(&mut pane, KeyCode::End);
        press(&mut pane, KeyCode::Backspace);
        assert_eq!(pane.text(), "hell\nworld");

        press(&mut pane, KeyCode::Home);
        press(&mut pane, KeyCode::Delete);
        assert_eq!(pane.text(), "ell\nworld");
    }

    #[test]
    fn test_control_keys() {
        let mut pane = pane();
        type_str(&mut pane, "abc");
        pane.handle_input(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(pane.buffer().cursor(), (0, 0));
        pane.handle_input(&KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        pane.handle_input(&KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert_eq!(pane.text(), "ab");

        // Other control chords are not inserted as text
        pane.handle_input(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        pane.handle_input(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(pane.text(), "ab");
    }

    #[test]
    fn test_blurred_pane_still_accepts_input() {
        let mut pane = pane();
        type_str(&mut pane, "hi");
        assert_eq!(pane.text(), "hi");
    }

    #[test]
    fn test_char_limit_from_config() {
        let config = EditorConfig {
            char_limit: 3,
            ..EditorConfig::default()
        };
        let mut pane = EditorPane::new(&config);
        type_str(&mut pane, "abcdef");
        assert_eq!(pane.text(), "abc");
    }

    #[test]
    fn test_render_focused_placeholder() {
        let mut pane = pane();
        pane.focus();
        insta::assert_snapshot!(render(&pane, 22, 4), @r"
        ╭────────────────────╮
        │  1 Type something  │
        │~                   │
        ╰────────────────────╯
        ");
    }

    #[test]
    fn test_render_blurred_hides_border() {
        let mut pane = pane();
        type_str(&mut pane, "one\ntwo");
        let rendered = render(&pane, 12, 5);
        assert_eq!(
            rendered.lines().collect::<Vec<_>>(),
            vec!["", "   1 one", "   2 two", " ~"]
        );
    }

    #[test]
    fn test_render_without_line_numbers() {
        let config = EditorConfig {
            show_line_numbers: false,
            ..EditorConfig::default()
        };
        let mut pane = EditorPane::new(&config);
        pane.focus();
        type_str(&mut pane, "abc");
        let rendered = render(&pane, 10, 3);
        assert_eq!(rendered.lines().nth(1), Some("│abc     │"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut pane = pane();
        pane.focus();
        type_str(&mut pane, "a\nb\nc\nd");
        // Two visible rows: the cursor is on line 4, so lines 3 and 4 show
        let rendered = render(&pane, 10, 4);
        let rows: Vec<_> = rendered.lines().collect();
        assert_eq!(rows[1], "│  3 c   │");
        assert_eq!(rows[2], "│  4 d   │");
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let mut pane = pane();
        pane.focus();
        type_str(&mut pane, "ab");
        press(&mut pane, KeyCode::Home);

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let borders = BorderSet::default();
        pane.view(&theme, &borders).render(area, &mut buf);

        // Border (1) + gutter (4) puts the first character at x = 5
        let cell = buf.cell((5, 1)).unwrap();
        assert_eq!(cell.symbol(), "a");
        assert!(cell.modifier.contains(Modifier::REVERSED));
        assert!(!buf.cell((6, 1)).unwrap().modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_long_line_scrolls_to_keep_cursor_visible() {
        let mut pane = pane();
        pane.focus();
        type_str(&mut pane, "abcdefgh");

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let borders = BorderSet::default();
        pane.view(&theme, &borders).render(area, &mut buf);

        // Four text columns: "fgh" plus the cursor after it
        let rows: Vec<_> = buffer_to_string(&buf).lines().map(String::from).collect();
        assert_eq!(rows[1], "│  1 fgh │");
        let cursor = buf.cell((8, 1)).unwrap();
        assert_eq!(cursor.symbol(), " ");
        assert!(cursor.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_cursor_moving_left_scrolls_back() {
        let mut pane = pane();
        pane.focus();
        type_str(&mut pane, "abcdefgh");
        press(&mut pane, KeyCode::Home);

        let rendered = render(&pane, 10, 3);
        assert_eq!(rendered.lines().nth(1), Some("│  1 abcd│"));
    }

    #[test]
    fn test_skip_columns() {
        assert_eq!(skip_columns("abcdef", 0), "abcdef");
        assert_eq!(skip_columns("abcdef", 4), "ef");
        assert_eq!(skip_columns("abc", 5), "");
        assert_eq!(display_width("日本語", 2), 4);
    }
}
