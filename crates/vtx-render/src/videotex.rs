#![forbid(unsafe_code)]

//! Videotex escape sequence generation.
//!
//! Pure byte-generation helpers for the device protocol. No state tracking
//! lives here; every function takes the relevant state (current attribute,
//! target position) as explicit parameters so the encoder can own the
//! tracking.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | Cursor   | `RS` | Home, position (1,1) |
//! | Cursor   | `US row col` | Absolute addressing, 0x40-offset bytes |
//! | Color    | `ESC 0x40+n` | Foreground, device code n |
//! | Color    | `ESC 0x50+n` | Background, device code n |
//! | Attr     | `ESC 0x5A/0x59` | Underline on/off |
//! | Attr     | `ESC 0x48/0x49` | Blink on/off |
//! | Attr     | `ESC 0x5D/0x5C` | Invert on/off |
//! | Attr     | `SO` / `SI` | Mosaic repertoire in/out |
//! | Screen   | `FF` | Clear screen and home cursor |

use crate::cell::{Attr, Color};

/// Escape lead byte.
pub const ESC: u8 = 0x1B;
/// Shift-out: enter the mosaic glyph repertoire.
pub const SO: u8 = 0x0E;
/// Shift-in: back to the text repertoire.
pub const SI: u8 = 0x0F;
/// Unit separator: absolute cursor addressing lead.
pub const US: u8 = 0x1F;
/// Record separator: cursor home, position (1,1).
pub const RS: u8 = 0x1E;
/// Form feed: clear the screen and home the cursor.
pub const FF: u8 = 0x0C;

/// Append a cursor-positioning sequence for the 1-indexed target.
///
/// Position (1,1) uses the single-byte home shortcut; everything else uses
/// the 3-byte absolute addressing sequence with 0x40-offset row and column.
pub fn push_position(out: &mut Vec<u8>, x: u16, y: u16) {
    debug_assert!(x >= 1 && y >= 1, "positions are 1-indexed");
    if x == 1 && y == 1 {
        out.push(RS);
    } else {
        out.extend_from_slice(&[US, 0x40 + y as u8, 0x40 + x as u8]);
    }
}

/// Foreground color sequence.
#[inline]
#[must_use]
pub const fn fg_sequence(color: Color) -> [u8; 2] {
    [ESC, 0x40 + color.terminal_code()]
}

/// Background color sequence.
#[inline]
#[must_use]
pub const fn bg_sequence(color: Color) -> [u8; 2] {
    [ESC, 0x50 + color.terminal_code()]
}

/// Bytes enabling an attribute. Empty for [`Attr::None`].
#[must_use]
pub const fn attr_enable(attr: Attr) -> &'static [u8] {
    match attr {
        Attr::None => &[],
        Attr::Underline => &[ESC, 0x5A],
        Attr::Blink => &[ESC, 0x48],
        Attr::Invert => &[ESC, 0x5D],
        Attr::Mosaic => &[SO],
    }
}

/// Bytes disabling an attribute. Empty for [`Attr::None`].
#[must_use]
pub const fn attr_disable(attr: Attr) -> &'static [u8] {
    match attr {
        Attr::None => &[],
        Attr::Underline => &[ESC, 0x59],
        Attr::Blink => &[ESC, 0x49],
        Attr::Invert => &[ESC, 0x5C],
        Attr::Mosaic => &[SI],
    }
}

/// Append the transition from one attribute to another.
///
/// Between two distinct non-None attributes this is a disable-then-enable
/// pair; from None it is enable-only, to None disable-only, and no bytes at
/// all when the attributes are equal.
pub fn push_attr_transition(out: &mut Vec<u8>, from: Attr, to: Attr) {
    if from == to {
        return;
    }
    out.extend_from_slice(attr_disable(from));
    out.extend_from_slice(attr_enable(to));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_single_byte() {
        let mut out = Vec::new();
        push_position(&mut out, 1, 1);
        assert_eq!(out, [RS]);
    }

    #[test]
    fn absolute_addressing_offsets_row_and_column() {
        let mut out = Vec::new();
        push_position(&mut out, 12, 3);
        assert_eq!(out, [US, 0x43, 0x4C]);
    }

    #[test]
    fn color_sequences_use_device_codes() {
        assert_eq!(fg_sequence(Color::White), [ESC, 0x47]);
        assert_eq!(bg_sequence(Color::Black), [ESC, 0x50]);
        // Gray1 sits at device code 4.
        assert_eq!(fg_sequence(Color::Gray1), [ESC, 0x44]);
        assert_eq!(bg_sequence(Color::Gray1), [ESC, 0x54]);
    }

    #[test]
    fn transition_between_attrs_is_disable_then_enable() {
        let mut out = Vec::new();
        push_attr_transition(&mut out, Attr::Underline, Attr::Blink);
        assert_eq!(out, [ESC, 0x59, ESC, 0x48]);
    }

    #[test]
    fn transition_from_none_enables_only() {
        let mut out = Vec::new();
        push_attr_transition(&mut out, Attr::None, Attr::Invert);
        assert_eq!(out, [ESC, 0x5D]);
    }

    #[test]
    fn transition_to_none_disables_only() {
        let mut out = Vec::new();
        push_attr_transition(&mut out, Attr::Mosaic, Attr::None);
        assert_eq!(out, [SI]);
    }

    #[test]
    fn equal_attrs_emit_nothing() {
        let mut out = Vec::new();
        push_attr_transition(&mut out, Attr::Blink, Attr::Blink);
        assert!(out.is_empty());
    }
}
