#![forbid(unsafe_code)]

//! Stateful cell-to-bytes encoder.
//!
//! [`AttributeEncoder`] turns changed cells into the minimal byte runs that
//! reproduce them remotely. It tracks what the *device* currently has
//! active — cursor, foreground, background, attribute — as last
//! transmitted, and only emits escape bytes on change. It never re-queries
//! the device.
//!
//! # Algorithm
//!
//! 1. Sort changed cells by (row, column).
//! 2. Partition into maximal runs of horizontally adjacent cells.
//! 3. Per run: position, leading-cell color changes, then per cell an
//!    attribute transition when needed plus the glyph bytes.
//! 4. At the end of every run, unconditionally reset attribute and colors
//!    to the defaults if they were changed. This bounds state leakage to
//!    one run, so no run ever depends on a look-ahead across runs.

use crate::cell::{Attr, Cell, Color};
use crate::videotex;
use smallvec::SmallVec;
use vtx_core::codec::Standard;

/// Stateful translator from changed cells to protocol byte runs.
#[derive(Debug, Clone)]
pub struct AttributeEncoder {
    standard: Standard,
    /// Device cursor as last transmitted. None until the first run.
    cursor: Option<(u16, u16)>,
    fg: Color,
    bg: Color,
    attr: Attr,
}

impl Default for AttributeEncoder {
    fn default() -> Self {
        Self::new(Standard::default())
    }
}

impl AttributeEncoder {
    /// Create an encoder transcoding glyphs with the given standard.
    #[must_use]
    pub const fn new(standard: Standard) -> Self {
        Self {
            standard,
            cursor: None,
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            attr: Attr::None,
        }
    }

    /// The device cursor position as last transmitted, if known.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Forget all tracked device state.
    ///
    /// Call after the device was cleared (FF homes the cursor and resets
    /// colors and attributes on the wire).
    pub fn reset(&mut self) {
        self.cursor = None;
        self.fg = Color::DEFAULT_FG;
        self.bg = Color::DEFAULT_BG;
        self.attr = Attr::None;
    }

    /// Encode changed cells into independently transmittable byte runs.
    pub fn encode(&mut self, changed: &[Cell]) -> Vec<Vec<u8>> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("encode", cells = changed.len()).entered();

        if changed.is_empty() {
            return Vec::new();
        }

        let mut cells: Vec<Cell> = changed.to_vec();
        cells.sort_by_key(|c| (c.y, c.x));

        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..cells.len() {
            let prev = &cells[i - 1];
            let cur = &cells[i];
            if cur.y != prev.y || cur.x != prev.x + 1 {
                runs.push(self.encode_run(&cells[start..i]));
                start = i;
            }
        }
        runs.push(self.encode_run(&cells[start..]));

        #[cfg(feature = "tracing")]
        tracing::trace!(runs = runs.len(), "cells encoded");
        runs
    }

    /// Encode one maximal horizontally contiguous run.
    fn encode_run(&mut self, run: &[Cell]) -> Vec<u8> {
        debug_assert!(!run.is_empty());
        let first = &run[0];
        let mut out = Vec::new();

        videotex::push_position(&mut out, first.x, first.y);

        if first.bg != self.bg {
            out.extend_from_slice(&videotex::bg_sequence(first.bg));
            self.bg = first.bg;
        }
        if first.fg != self.fg {
            out.extend_from_slice(&videotex::fg_sequence(first.fg));
            self.fg = first.fg;
        }

        for cell in run {
            if cell.attr != self.attr {
                videotex::push_attr_transition(&mut out, self.attr, cell.attr);
                self.attr = cell.attr;
            }
            let glyph: SmallVec<[u8; 3]> = self.standard.expand_char(cell.glyph);
            out.extend_from_slice(&glyph);
        }

        // Bound state leakage to this run.
        if self.attr != Attr::None {
            out.extend_from_slice(videotex::attr_disable(self.attr));
            self.attr = Attr::None;
        }
        if self.fg != Color::DEFAULT_FG {
            out.extend_from_slice(&videotex::fg_sequence(Color::DEFAULT_FG));
            self.fg = Color::DEFAULT_FG;
        }
        if self.bg != Color::DEFAULT_BG {
            out.extend_from_slice(&videotex::bg_sequence(Color::DEFAULT_BG));
            self.bg = Color::DEFAULT_BG;
        }

        let last = &run[run.len() - 1];
        self.cursor = Some((last.x + 1, last.y));
        out
    }
}
