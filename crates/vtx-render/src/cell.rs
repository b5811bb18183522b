#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The [`Cell`] is the atomic renderable unit: a 1-indexed position, one
//! glyph, a foreground and background color, and one text attribute.
//! Equality is structural over all five fields; the diff buffer relies on
//! it to decide whether a cell needs retransmission.
//!
//! Cells are produced fresh every render cycle. The diff buffer owns the
//! only long-lived copies.

/// One of the 8 fixed luminance levels the device can display.
///
/// Levels are ordered by luminance, BLACK to WHITE. The device's own color
/// codes are *not* in luminance order; [`Color::terminal_code`] maps through
/// the literal device table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// Level 0.
    Black = 0,
    /// Level 1.
    Gray1 = 1,
    /// Level 2.
    Gray2 = 2,
    /// Level 3.
    Gray3 = 3,
    /// Level 4.
    Gray4 = 4,
    /// Level 5.
    Gray5 = 5,
    /// Level 6.
    Gray6 = 6,
    /// Level 7.
    #[default]
    White = 7,
}

/// Luminance level -> device color code.
const DEVICE_CODES: [u8; 8] = [0, 4, 1, 5, 2, 6, 3, 7];

impl Color {
    /// Default foreground the device starts a run with.
    pub const DEFAULT_FG: Self = Self::White;
    /// Default background the device starts a run with.
    pub const DEFAULT_BG: Self = Self::Black;

    /// The luminance level, 0-7.
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Build a color from a luminance level.
    ///
    /// # Panics
    ///
    /// Debug-asserts `level <= 7`; out-of-range levels clamp to white.
    #[inline]
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        debug_assert!(level <= 7, "luminance level out of range");
        match level {
            0 => Self::Black,
            1 => Self::Gray1,
            2 => Self::Gray2,
            3 => Self::Gray3,
            4 => Self::Gray4,
            5 => Self::Gray5,
            6 => Self::Gray6,
            _ => Self::White,
        }
    }

    /// The device color code for this luminance level.
    #[inline]
    #[must_use]
    pub const fn terminal_code(self) -> u8 {
        DEVICE_CODES[self as usize]
    }
}

/// A text attribute. Attributes are mutually exclusive states, not flags:
/// a cell is underlined *or* blinking *or* inverted *or* mosaic, never a
/// combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    /// No attribute active.
    #[default]
    None,
    /// Underlined text.
    Underline,
    /// Blinking text.
    Blink,
    /// Inverted video.
    Invert,
    /// Semigraphic mosaic glyph repertoire.
    Mosaic,
}

/// The atomic renderable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column, 1-indexed.
    pub x: u16,
    /// Row, 1-indexed (row 0 is the reserved status line and never appears
    /// in a cell).
    pub y: u16,
    /// The glyph to display.
    pub glyph: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Active attribute.
    pub attr: Attr,
}

impl Cell {
    /// Create a cell with default colors and no attribute.
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16, glyph: char) -> Self {
        Self {
            x,
            y,
            glyph,
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            attr: Attr::None,
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the attribute.
    #[inline]
    #[must_use]
    pub const fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural_over_all_fields() {
        let a = Cell::new(1, 1, 'x');
        assert_eq!(a, Cell::new(1, 1, 'x'));
        assert_ne!(a, Cell::new(2, 1, 'x'));
        assert_ne!(a, Cell::new(1, 2, 'x'));
        assert_ne!(a, Cell::new(1, 1, 'y'));
        assert_ne!(a, Cell::new(1, 1, 'x').with_fg(Color::Gray3));
        assert_ne!(a, Cell::new(1, 1, 'x').with_bg(Color::Gray1));
        assert_ne!(a, Cell::new(1, 1, 'x').with_attr(Attr::Blink));
    }

    #[test]
    fn device_codes_follow_luminance_order() {
        assert_eq!(Color::Black.terminal_code(), 0);
        assert_eq!(Color::Gray1.terminal_code(), 4);
        assert_eq!(Color::Gray2.terminal_code(), 1);
        assert_eq!(Color::Gray3.terminal_code(), 5);
        assert_eq!(Color::Gray4.terminal_code(), 2);
        assert_eq!(Color::Gray5.terminal_code(), 6);
        assert_eq!(Color::Gray6.terminal_code(), 3);
        assert_eq!(Color::White.terminal_code(), 7);
    }

    #[test]
    fn from_level_round_trips() {
        for level in 0..=7u8 {
            assert_eq!(Color::from_level(level).level(), level);
        }
    }
}
