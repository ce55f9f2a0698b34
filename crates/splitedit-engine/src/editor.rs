//! The editor seam between the pane manager and a concrete widget.

use crossterm::event::KeyEvent;

/// An editor widget the pane manager can lay out and route input to.
///
/// The manager owns focus: it calls [`Editor::focus`] and [`Editor::blur`]
/// and never reads an editor's own flag to decide which pane is focused.
pub trait Editor {
    /// Give the editor keyboard focus.
    fn focus(&mut self);

    /// Take keyboard focus away.
    fn blur(&mut self);

    /// Whether the editor currently draws itself as focused.
    fn is_focused(&self) -> bool;

    /// Set the horizontal size available to the editor.
    fn set_width(&mut self, width: u16);

    /// Current width.
    fn width(&self) -> u16;

    /// Handle one key that is not a pane command.
    fn handle_input(&mut self, key: &KeyEvent);
}
