#![forbid(unsafe_code)]

//! Core widgets for the vtx Videotex stack.
//!
//! A widget owns a clamped rectangle of the screen and produces cells on
//! demand. Rendering is pure: `render` reads the widget's state and returns
//! cells, with no side effects. Key handling is the only mutation path.

pub mod entry;
pub mod footer;
pub mod header;
pub mod label;
pub mod rule;
pub mod selectable;

pub use entry::ListEntry;
pub use footer::Footer;
pub use header::Header;
pub use label::Label;
pub use rule::{HorizontalRule, RuleKind};
pub use selectable::{PageRow, SelectableList};

use vtx_core::key::Key;
use vtx_render::cell::{Attr, Cell, Color};

/// A renderable screen element bounded by a clamped rectangle.
pub trait Widget {
    /// Produce the cells to display. Pure: no side effects beyond reading
    /// the widget's own state.
    fn render(&self) -> Vec<Cell>;

    /// Offer a key to the widget.
    ///
    /// Returns true iff the widget consumed the key and may need a
    /// re-render. The default ignores everything.
    fn handle_key(&mut self, _key: Key) -> bool {
        false
    }
}

/// Lay out a text as one cell per character starting at (x, y).
///
/// The glyphs stay unicode here; transcoding to device bytes happens in the
/// encoder, so widgets never deal with byte sequences.
pub fn draw_text(x: u16, y: u16, text: &str, fg: Color, attr: Attr) -> Vec<Cell> {
    text.chars()
        .enumerate()
        .map(|(i, c)| Cell::new(x + i as u16, y, c).with_fg(fg).with_attr(attr))
        .collect()
}
