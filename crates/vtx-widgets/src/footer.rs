#![forbid(unsafe_code)]

//! Screen footer: separator line plus status text.

use crate::rule::{HorizontalRule, RuleKind};
use crate::{Label, Widget};
use vtx_core::geometry::ScreenSize;
use vtx_render::cell::Cell;

/// A full-width footer occupying the bottom two rows.
#[derive(Debug, Clone)]
pub struct Footer {
    rule: HorizontalRule,
    status: Label,
}

impl Footer {
    /// Create a footer with the given status text.
    #[must_use]
    pub fn new(status: impl Into<String>, screen: ScreenSize) -> Self {
        let y = screen.rows - 1;
        Self {
            rule: HorizontalRule::new(1, y, screen.cols, RuleKind::Middle, screen),
            status: Label::new(1, y + 1, status, screen),
        }
    }

    /// Replace the status text (e.g. the current directory).
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status.set_text(status);
    }
}

impl Widget for Footer {
    fn render(&self) -> Vec<Cell> {
        let mut cells = self.rule.render();
        cells.extend(self.status.render());
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_sits_on_the_bottom_rows() {
        let footer = Footer::new("/tmp", ScreenSize::default());
        let cells = footer.render();
        assert!(cells.iter().all(|c| c.y == 23 || c.y == 24));
        assert_eq!(cells.iter().filter(|c| c.y == 24).count(), 4);
    }
}
