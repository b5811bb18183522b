#![forbid(unsafe_code)]

//! Quantized luminance blocks to semigraphic glyph cells.
//!
//! A mosaic glyph encodes a 2x3 pixel block in one character cell, rendered
//! in two colors via [`Attr::Mosaic`]. The converter reduces each block to
//! its two dominant luminance levels, classifies every pixel to the nearer
//! of the two, and packs the six binary classifications into the glyph's
//! pixel bits. Bits 7 and 5 of the glyph code are structural and held fixed.
//!
//! Quantization itself (image -> 8-level luminance grid) is an upstream
//! collaborator; this module only consumes its output.

use crate::cell::{Attr, Cell, Color};

/// Pixel columns per mosaic glyph.
pub const BLOCK_WIDTH: usize = 2;
/// Pixel rows per mosaic glyph.
pub const BLOCK_HEIGHT: usize = 3;

/// An 8-level quantized luminance grid.
///
/// Dimensions must be exact multiples of the 2x3 block size.
#[derive(Debug, Clone)]
pub struct LuminanceGrid {
    width: usize,
    height: usize,
    levels: Vec<u8>,
}

impl LuminanceGrid {
    /// Wrap a row-major grid of luminance levels.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are not multiples of 2x3, if the level
    /// count does not match, or if any level exceeds 7. These are contract
    /// violations by the quantizing collaborator, not runtime conditions.
    #[must_use]
    pub fn new(width: usize, height: usize, levels: Vec<u8>) -> Self {
        assert!(
            width % BLOCK_WIDTH == 0 && height % BLOCK_HEIGHT == 0,
            "grid dimensions must be multiples of {BLOCK_WIDTH}x{BLOCK_HEIGHT}"
        );
        assert_eq!(levels.len(), width * height, "level count mismatch");
        assert!(levels.iter().all(|&l| l <= 7), "luminance level out of range");
        Self {
            width,
            height,
            levels,
        }
    }

    /// Grid width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Output width in glyph cells.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.width / BLOCK_WIDTH
    }

    /// Output height in glyph cells.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.height / BLOCK_HEIGHT
    }

    #[inline]
    fn level_at(&self, x: usize, y: usize) -> u8 {
        self.levels[y * self.width + x]
    }

    /// The six pixels of a block, row by row: [p0 p1 / p2 p3 / p4 p5].
    fn block(&self, col: usize, row: usize) -> [u8; 6] {
        let mut pixels = [0u8; 6];
        for dy in 0..BLOCK_HEIGHT {
            for dx in 0..BLOCK_WIDTH {
                pixels[dy * BLOCK_WIDTH + dx] =
                    self.level_at(col * BLOCK_WIDTH + dx, row * BLOCK_HEIGHT + dy);
            }
        }
        pixels
    }
}

/// Convert a luminance grid into mosaic glyph cells, one per 2x3 block.
///
/// Cells are positioned 1-indexed from the top-left of the grid; the
/// block's dominant level becomes the cell background and the runner-up
/// the foreground.
#[must_use]
pub fn convert(grid: &LuminanceGrid) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(grid.cols() * grid.rows());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pixels = grid.block(col, row);
            let (background, foreground) = dominant_levels(&pixels);
            let glyph = block_glyph(&pixels, background, foreground);
            cells.push(
                Cell::new(col as u16 + 1, row as u16 + 1, glyph as char)
                    .with_fg(Color::from_level(foreground))
                    .with_bg(Color::from_level(background))
                    .with_attr(Attr::Mosaic),
            );
        }
    }
    cells
}

/// The two most frequent levels in a block, most frequent first.
///
/// Frequency ties prefer the numerically lower level.
fn dominant_levels(pixels: &[u8; 6]) -> (u8, u8) {
    let mut counts = [0u8; 8];
    for &level in pixels {
        counts[level as usize] += 1;
    }

    let mut first = 0;
    for level in 1..8 {
        if counts[level] > counts[first] {
            first = level;
        }
    }
    let mut second = usize::from(first == 0);
    for level in 0..8 {
        if level != first && counts[level] > counts[second] {
            second = level;
        }
    }
    (first as u8, second as u8)
}

/// Pack the six binary classifications into a mosaic glyph code.
///
/// A pixel classifies as foreground (bit 1) when strictly nearer the
/// foreground level; distance ties go to the background (the
/// first-selected level). Bit layout, pixels p0..p5 reading the block row
/// by row: `0 p5 1 p4 p3 p2 p1 p0` from bit 7 down to bit 0.
fn block_glyph(pixels: &[u8; 6], background: u8, foreground: u8) -> u8 {
    let mut bits = [0u8; 6];
    for (i, &level) in pixels.iter().enumerate() {
        let to_bg = background.abs_diff(level);
        let to_fg = foreground.abs_diff(level);
        bits[i] = u8::from(to_fg < to_bg);
    }
    0x20 | (bits[5] << 6)
        | (bits[4] << 4)
        | (bits[3] << 3)
        | (bits[2] << 2)
        | (bits[1] << 1)
        | bits[0]
}
