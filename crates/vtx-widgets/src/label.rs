#![forbid(unsafe_code)]

//! Single-line text label.

use crate::{Widget, draw_text};
use vtx_core::geometry::{Rect, ScreenSize};
use vtx_render::cell::{Attr, Cell, Color};

/// A one-line text widget.
#[derive(Debug, Clone)]
pub struct Label {
    rect: Rect,
    text: String,
    fg: Color,
    attr: Attr,
}

impl Label {
    /// Create a label at (x, y), sized to its text and clamped to the screen.
    #[must_use]
    pub fn new(x: u16, y: u16, text: impl Into<String>, screen: ScreenSize) -> Self {
        let text = text.into();
        Self {
            rect: Rect::new(x, y, text.chars().count() as u16, 1, screen),
            text,
            fg: Color::DEFAULT_FG,
            attr: Attr::None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the attribute.
    #[must_use]
    pub const fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The widget bounds.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }
}

impl Widget for Label {
    fn render(&self) -> Vec<Cell> {
        let clipped: String = self.text.chars().take(self.rect.width as usize).collect();
        draw_text(self.rect.x, self.rect.y, &clipped, self.fg, self.attr)
    }
}
