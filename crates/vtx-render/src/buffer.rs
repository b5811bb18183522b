#![forbid(unsafe_code)]

//! The last-transmitted screen state and its diff operation.
//!
//! The remote device has no readable framebuffer, so [`ScreenDiffBuffer`]
//! is the only record of what it currently shows. A position holds the most
//! recent cell ever successfully diffed into it, or is empty if never
//! touched — untouched positions are *not* assumed blank.
//!
//! The buffer is mutated only by [`ScreenDiffBuffer::apply`] and cleared
//! wholesale on scene transitions so the next frame is drawn in full.

use crate::cell::Cell;
use vtx_core::geometry::ScreenSize;

/// Grid of the last-known cell per screen position.
#[derive(Debug, Clone)]
pub struct ScreenDiffBuffer {
    size: ScreenSize,
    cells: Vec<Option<Cell>>,
}

impl ScreenDiffBuffer {
    /// Create an empty buffer for the given geometry.
    #[must_use]
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            cells: vec![None; size.area() as usize],
        }
    }

    /// The buffer geometry.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> ScreenSize {
        self.size
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize - 1) * self.size.cols as usize + (x as usize - 1)
    }

    /// The stored cell at a 1-indexed position, if ever diffed into.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if !self.size.contains(x, y) {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Diff candidate cells against the stored state.
    ///
    /// Returns, in input order, the subset of candidates that differ from
    /// (or are absent at) their stored position; each such candidate
    /// replaces the stored cell. Candidates identical to the stored cell
    /// are dropped. Off-screen candidates are the caller's bug.
    pub fn apply(&mut self, candidates: &[Cell]) -> Vec<Cell> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("diff_apply", candidates = candidates.len()).entered();

        let mut changed = Vec::new();
        for cell in candidates {
            debug_assert!(
                self.size.contains(cell.x, cell.y),
                "candidate cell off screen"
            );
            let idx = self.index(cell.x, cell.y);
            if self.cells[idx].as_ref() != Some(cell) {
                self.cells[idx] = Some(*cell);
                changed.push(*cell);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(changed = changed.len(), "diff applied");
        changed
    }

    /// Reset every position to empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Attr, Color};

    fn buffer() -> ScreenDiffBuffer {
        ScreenDiffBuffer::new(ScreenSize::default())
    }

    #[test]
    fn first_apply_returns_everything() {
        let mut buf = buffer();
        let cells = vec![Cell::new(1, 1, 'a'), Cell::new(2, 1, 'b')];
        assert_eq!(buf.apply(&cells), cells);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut buf = buffer();
        let cells = vec![
            Cell::new(1, 1, 'a'),
            Cell::new(2, 1, 'b').with_fg(Color::Gray4),
            Cell::new(5, 9, 'c').with_attr(Attr::Invert),
        ];
        assert_eq!(buf.apply(&cells), cells);
        assert!(buf.apply(&cells).is_empty());
    }

    #[test]
    fn changed_subset_keeps_input_order() {
        let mut buf = buffer();
        buf.apply(&[Cell::new(1, 1, 'a'), Cell::new(2, 1, 'b')]);

        let next = vec![
            Cell::new(2, 1, 'B'),
            Cell::new(1, 1, 'a'),
            Cell::new(3, 1, 'c'),
        ];
        assert_eq!(
            buf.apply(&next),
            vec![Cell::new(2, 1, 'B'), Cell::new(3, 1, 'c')]
        );
    }

    #[test]
    fn attribute_only_change_is_detected() {
        let mut buf = buffer();
        buf.apply(&[Cell::new(4, 4, 'x')]);
        let inverted = Cell::new(4, 4, 'x').with_attr(Attr::Invert);
        assert_eq!(buf.apply(&[inverted]), vec![inverted]);
    }

    #[test]
    fn clear_forgets_all_state() {
        let mut buf = buffer();
        let cells = vec![Cell::new(1, 1, 'a')];
        buf.apply(&cells);
        buf.clear();
        assert!(buf.get(1, 1).is_none());
        assert_eq!(buf.apply(&cells), cells);
    }

    #[test]
    fn get_reflects_last_stored_cell() {
        let mut buf = buffer();
        buf.apply(&[Cell::new(7, 3, 'q')]);
        assert_eq!(buf.get(7, 3), Some(&Cell::new(7, 3, 'q')));
        assert!(buf.get(8, 3).is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_cell() -> impl Strategy<Value = Cell> {
            (1u16..=40, 1u16..=24, proptest::char::range('a', 'z')).prop_map(|(x, y, g)| {
                Cell::new(x, y, g)
            })
        }

        proptest! {
            #[test]
            fn apply_twice_yields_all_then_nothing(
                cells in prop::collection::vec(arb_cell(), 0..64),
            ) {
                // Keep positions unique so the first apply returns the
                // input verbatim.
                let mut seen = std::collections::HashSet::new();
                let cells: Vec<Cell> =
                    cells.into_iter().filter(|c| seen.insert((c.x, c.y))).collect();

                let mut buf = buffer();
                prop_assert_eq!(buf.apply(&cells), cells.clone());
                prop_assert!(buf.apply(&cells).is_empty());
            }
        }
    }
}
