#![forbid(unsafe_code)]

//! Screen header: title row plus separator line.

use crate::rule::{HorizontalRule, RuleKind};
use crate::{Label, Widget};
use vtx_core::geometry::ScreenSize;
use vtx_render::cell::Cell;

/// A full-width header occupying the top two rows.
#[derive(Debug, Clone)]
pub struct Header {
    title: Label,
    rule: HorizontalRule,
}

impl Header {
    /// Create a header with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>, screen: ScreenSize) -> Self {
        Self {
            title: Label::new(1, 1, title, screen),
            rule: HorizontalRule::new(1, 2, screen.cols, RuleKind::Top, screen),
        }
    }

    /// Replace the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title.set_text(title);
    }
}

impl Widget for Header {
    fn render(&self) -> Vec<Cell> {
        let mut cells = self.title.render();
        cells.extend(self.rule.render());
        cells
    }
}
