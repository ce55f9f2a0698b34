//! Main layout with 3 regions.
//!
//! Regions:
//! 1. Editor row (top, all remaining height)
//! 2. Spacer (1 line)
//! 3. Help bar (bottom, 1 line)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
    Frame,
};
use splitedit_engine::{Editor, PaneManager};

use crate::editor::EditorPane;
use crate::theme::{BorderSet, Theme};
use crate::widgets::{hints_for, HelpBar};

/// Rows below the editors: spacer plus help bar.
pub const HELP_HEIGHT: u16 = 2;

/// Render the whole screen into a frame.
pub fn render_app(
    frame: &mut Frame<'_>,
    manager: &PaneManager<EditorPane>,
    theme: &Theme,
    borders: &BorderSet,
) {
    let area = frame.area();
    render_to_buffer(area, frame.buffer_mut(), manager, theme, borders);
}

/// Render the whole screen into a buffer.
pub fn render_to_buffer(
    area: Rect,
    buf: &mut Buffer,
    manager: &PaneManager<EditorPane>,
    theme: &Theme,
    borders: &BorderSet,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Editors (expands)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let widths: Vec<u16> = manager.panes().iter().map(Editor::width).collect();
    for (pane, rect) in manager.panes().iter().zip(pane_rects(chunks[0], &widths)) {
        pane.view(theme, borders).render(rect, buf);
    }

    let hints = hints_for(manager);
    HelpBar::new(&hints, theme).render(chunks[2], buf);
}

/// Place panes left to right using each pane's own width, clipped to `area`.
///
/// Columns past the last pane are left empty.
pub fn pane_rects(area: Rect, widths: &[u16]) -> Vec<Rect> {
    let mut x = area.x;
    widths
        .iter()
        .map(|&width| {
            let start = x.min(area.right());
            let clipped = width.min(area.right() - start);
            x = x.saturating_add(width);
            Rect::new(start, area.y, clipped, area.height)
        })
        .collect()
}
