//! Editor widget used by every pane.
//!
//! - [`TextBuffer`] - lines plus a character-indexed cursor
//! - [`EditorPane`] - the engine `Editor` implementation and its view

mod buffer;
mod pane;

pub use buffer::TextBuffer;
pub use pane::{EditorPane, EditorView};
