#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! The device coordinate system is 1-indexed: column 1, row 1 is the top-left
//! of the drawable area. Row 0 exists on the wire as the status row and is
//! handled outside normal rendering, so it never appears in a [`Rect`].

/// Screen geometry in character cells.
///
/// The default matches the classic 40x24 Videotex page (row 0 excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Columns per row.
    pub cols: u16,
    /// Drawable rows (status row not counted).
    pub rows: u16,
}

impl ScreenSize {
    /// Create a new screen size.
    #[inline]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Total drawable cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.cols as u32 * self.rows as u32
    }

    /// Check whether a 1-indexed position is on the drawable screen.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= 1 && x <= self.cols && y >= 1 && y <= self.rows
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(40, 24)
    }
}

/// A 1-indexed rectangle bounding a widget.
///
/// Construction clamps the rectangle so it never exceeds the screen:
/// `1 <= x`, `x + width - 1 <= screen.cols`, and likewise for `y`/`height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left column (inclusive, >= 1).
    pub x: u16,
    /// Top row (inclusive, >= 1).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a rectangle clamped to the given screen.
    pub fn new(x: u16, y: u16, width: u16, height: u16, screen: ScreenSize) -> Self {
        let x = x.clamp(1, screen.cols);
        let y = y.clamp(1, screen.rows);
        Self {
            x,
            y,
            width: width.min(screen.cols - x + 1),
            height: height.min(screen.rows - y + 1),
        }
    }

    /// Right column (inclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x + self.width - 1
    }

    /// Bottom row (inclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y + self.height - 1
    }

    /// Check if a 1-indexed point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}
