#![forbid(unsafe_code)]

//! Horizontal separator drawn with mosaic glyphs.

use crate::{Widget, draw_text};
use vtx_core::geometry::{Rect, ScreenSize};
use vtx_render::cell::{Attr, Cell, Color};

/// Vertical placement of the line within its character row.
///
/// The mosaic repertoire has no generic box-drawing set; a full-width line
/// comes from repeating the glyph whose lit pixel row sits at the top,
/// middle, or bottom of the 2x3 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleKind {
    /// Pixel row at the top of the cell ('#').
    #[default]
    Top,
    /// Pixel row in the middle (',').
    Middle,
    /// Pixel row at the bottom ('p').
    Bottom,
}

impl RuleKind {
    /// The mosaic glyph that draws this line.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Top => '#',
            Self::Middle => ',',
            Self::Bottom => 'p',
        }
    }
}

/// A one-row horizontal line.
#[derive(Debug, Clone)]
pub struct HorizontalRule {
    rect: Rect,
    kind: RuleKind,
    fg: Color,
}

impl HorizontalRule {
    /// Create a rule of the given length, clamped to the screen.
    #[must_use]
    pub fn new(x: u16, y: u16, length: u16, kind: RuleKind, screen: ScreenSize) -> Self {
        Self {
            rect: Rect::new(x, y, length, 1, screen),
            kind,
            fg: Color::DEFAULT_FG,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }
}

impl Widget for HorizontalRule {
    fn render(&self) -> Vec<Cell> {
        let line: String = std::iter::repeat_n(self.kind.glyph(), self.rect.width as usize)
            .collect();
        draw_text(self.rect.x, self.rect.y, &line, self.fg, Attr::Mosaic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_repeats_its_glyph_in_mosaic_mode() {
        let rule = HorizontalRule::new(1, 2, 5, RuleKind::Top, ScreenSize::default());
        let cells = rule.render();
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|c| c.glyph == '#' && c.attr == Attr::Mosaic));
    }

    #[test]
    fn rule_is_clamped_to_screen_width() {
        let rule = HorizontalRule::new(1, 1, 99, RuleKind::Middle, ScreenSize::default());
        assert_eq!(rule.render().len(), 40);
    }
}
