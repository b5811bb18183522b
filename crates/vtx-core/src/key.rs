#![forbid(unsafe_code)]

//! The logical key surface.
//!
//! Received byte sequences are matched against a fixed table of known
//! sequences; anything unknown falls back to a literal character so that
//! decoding always produces *some* key.

/// A logical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Validate / enter.
    Enter,
    /// Cancel / escape.
    Cancel,
    /// A literal printable character.
    Char(char),
}

impl Key {
    /// Decode a received byte sequence into a logical key.
    ///
    /// Known sequences (CR or the SS3 function-key sequence for Enter, a
    /// lone ESC for Cancel, CSI arrows with BS/LF aliases for Left/Down)
    /// are matched exactly; any other sequence yields its last byte as a
    /// literal character. Returns `None` only for an empty sequence.
    #[must_use]
    pub fn from_sequence(seq: &[u8]) -> Option<Self> {
        let key = match seq {
            [] => return None,
            [0x0D] | [0x1B, 0x4F, 0x4D] => Self::Enter,
            [0x1B] => Self::Cancel,
            [0x1B, 0x5B, 0x41] => Self::Up,
            [0x1B, 0x5B, 0x42] | [0x0A] => Self::Down,
            [0x1B, 0x5B, 0x43] => Self::Right,
            [0x1B, 0x5B, 0x44] | [0x08] => Self::Left,
            other => Self::Char(other[other.len() - 1] as char),
        };
        Some(key)
    }

    /// Check if this is a specific literal character.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Self::Char(ch) if *ch == c)
    }
}
