#![forbid(unsafe_code)]

//! Unicode <-> terminal transcoding.
//!
//! The device does not speak unicode. Each transcoding standard carries a
//! literal table mapping the characters the device can display to the 1-3
//! byte sequences that produce them. The primary standard composes accented
//! characters with a 0x19 lead byte; the reduced standards bracket a handful
//! of replacement glyphs in SO/SI.
//!
//! # Design Principles
//!
//! - **Total**: transcoding never fails. Unmapped characters degrade to
//!   their raw low-order byte rather than erroring.
//! - **Literal data**: the tables are device documentation, not derivable.
//! - **Typed inputs**: [`SeqValue`] makes the canonicalization precondition
//!   (int / text / nested sequence only) structural instead of a runtime
//!   check.

use smallvec::SmallVec;

/// Forward table for the primary standard: unicode -> composed byte
/// sequence. Accents are built from a 0x19 lead plus the combining code and
/// the base letter.
const VIDEOTEX_FORWARD: &[(char, &[u8])] = &[
    ('£', &[0x19, 0x23]),
    ('°', &[0x19, 0x30]),
    ('±', &[0x19, 0x31]),
    ('←', &[0x19, 0x2C]),
    ('↑', &[0x19, 0x2D]),
    ('→', &[0x19, 0x2E]),
    ('↓', &[0x19, 0x2F]),
    ('¼', &[0x19, 0x3C]),
    ('½', &[0x19, 0x3D]),
    ('¾', &[0x19, 0x3E]),
    ('ç', &[0x19, 0x4B, 0x63]),
    ('’', &[0x19, 0x4B, 0x27]),
    ('à', &[0x19, 0x41, 0x61]),
    ('á', &[0x19, 0x42, 0x61]),
    ('â', &[0x19, 0x43, 0x61]),
    ('ä', &[0x19, 0x48, 0x61]),
    ('è', &[0x19, 0x41, 0x65]),
    ('é', &[0x19, 0x42, 0x65]),
    ('ê', &[0x19, 0x43, 0x65]),
    ('ë', &[0x19, 0x48, 0x65]),
    ('ì', &[0x19, 0x41, 0x69]),
    ('í', &[0x19, 0x42, 0x69]),
    ('î', &[0x19, 0x43, 0x69]),
    ('ï', &[0x19, 0x48, 0x69]),
    ('ò', &[0x19, 0x41, 0x6F]),
    ('ó', &[0x19, 0x42, 0x6F]),
    ('ô', &[0x19, 0x43, 0x6F]),
    ('ö', &[0x19, 0x48, 0x6F]),
    ('ù', &[0x19, 0x41, 0x75]),
    ('ú', &[0x19, 0x42, 0x75]),
    ('û', &[0x19, 0x43, 0x75]),
    ('ü', &[0x19, 0x48, 0x75]),
    ('Œ', &[0x19, 0x6A]),
    ('œ', &[0x19, 0x7A]),
    // β shares the sharp-s code; the reverse table keeps the first entry.
    ('ß', &[0x19, 0x7B]),
    ('β', &[0x19, 0x7B]),
];

/// Forward table for the reduced standards: a handful of replacement glyphs
/// bracketed in SO/SI, plus two bare ASCII fallbacks.
const REDUCED_FORWARD: &[(char, &[u8])] = &[
    ('£', &[0x0E, 0x23, 0x0F]),
    ('°', &[0x0E, 0x5B, 0x0F]),
    ('ç', &[0x0E, 0x5C, 0x0F]),
    ('’', &[0x27]),
    ('`', &[0x60]),
    ('§', &[0x0E, 0x5D, 0x0F]),
    ('à', &[0x0E, 0x40, 0x0F]),
    ('è', &[0x0E, 0x7F, 0x0F]),
    ('é', &[0x0E, 0x7B, 0x0F]),
    ('ù', &[0x0E, 0x7C, 0x0F]),
];

/// Longest known byte sequence in the reverse tables.
const MAX_SEQUENCE_LEN: usize = 3;

/// Control bytes silently dropped when decoding the reduced standards.
const REDUCED_DROPPED: [u8; 4] = [0x00, 0x1B, 0x0D, 0x0A];

/// A character-transcoding standard.
///
/// The primary standard is `Videotex`; `Mixed` and `Teleinformatique` share
/// the reduced table and ASCII-oriented decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Standard {
    /// Primary standard with the full accent-composition table.
    #[default]
    Videotex,
    /// Reduced mixed mode.
    Mixed,
    /// Reduced teleinformatic mode.
    Teleinformatique,
}

impl Standard {
    /// Whether this standard uses the reduced table.
    #[inline]
    #[must_use]
    pub const fn is_reduced(self) -> bool {
        !matches!(self, Self::Videotex)
    }

    /// Expand one unicode character into its device byte sequence.
    ///
    /// Characters outside the active table (and outside printable ASCII)
    /// are emitted as their raw low-order byte: lossy but total.
    #[must_use]
    pub fn expand_char(self, c: char) -> SmallVec<[u8; MAX_SEQUENCE_LEN]> {
        let table = if self.is_reduced() {
            REDUCED_FORWARD
        } else {
            VIDEOTEX_FORWARD
        };
        if let Some((_, bytes)) = table.iter().find(|(ch, _)| *ch == c) {
            return SmallVec::from_slice(bytes);
        }
        let mut out = SmallVec::new();
        out.push((c as u32 & 0xFF) as u8);
        out
    }

    /// Flatten a value into the canonical flat byte list.
    ///
    /// Nested lists are flattened at any depth; every text character is
    /// expanded independently through the active standard's table.
    #[must_use]
    pub fn canonicalize(self, value: &SeqValue) -> Vec<u8> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("canonicalize", standard = ?self).entered();

        let mut out = Vec::new();
        self.canonicalize_into(value, &mut out);

        #[cfg(feature = "tracing")]
        tracing::trace!(bytes = out.len(), "canonicalized");
        out
    }

    fn canonicalize_into(self, value: &SeqValue, out: &mut Vec<u8>) {
        match value {
            SeqValue::Byte(b) => out.push(*b),
            SeqValue::Text(text) => {
                for c in text.chars() {
                    out.extend_from_slice(&self.expand_char(c));
                }
            }
            SeqValue::List(items) => {
                for item in items {
                    self.canonicalize_into(item, out);
                }
            }
        }
    }

    /// Decode bytes received from the device back into text.
    ///
    /// The primary standard attempts a longest-known-sequence match against
    /// the inverted forward tables before falling back to printable ASCII;
    /// unmatched non-printable bytes are skipped. The reduced standards
    /// treat bytes as ASCII, dropping NUL/ESC/CR/LF and everything outside
    /// the printable range.
    #[must_use]
    pub fn decode(self, data: &[u8]) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("decode", standard = ?self, bytes = data.len()).entered();

        let mut out = String::new();
        let mut i = 0;
        while i < data.len() {
            if !self.is_reduced()
                && let Some((c, len)) = longest_reverse_match(&data[i..])
            {
                out.push(c);
                i += len;
                continue;
            }
            let byte = data[i];
            i += 1;
            if self.is_reduced() && REDUCED_DROPPED.contains(&byte) {
                continue;
            }
            if (0x20..=0x7E).contains(&byte) {
                out.push(byte as char);
            }
        }
        out
    }
}

/// Match the longest known sequence at the head of `data`.
///
/// Both forward tables feed the reverse map; on duplicate byte sequences the
/// first table entry wins.
fn longest_reverse_match(data: &[u8]) -> Option<(char, usize)> {
    let max = MAX_SEQUENCE_LEN.min(data.len());
    for len in (1..=max).rev() {
        let head = &data[..len];
        let hit = VIDEOTEX_FORWARD
            .iter()
            .chain(REDUCED_FORWARD)
            .find(|(_, bytes)| *bytes == head);
        if let Some((c, _)) = hit {
            return Some((*c, len));
        }
    }
    None
}

/// A canonicalizable value: a byte, a text, or an arbitrarily nested list.
///
/// Any other input shape is unrepresentable, which is the precondition of
/// canonicalization expressed in the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqValue {
    /// A raw byte, passed through unchanged.
    Byte(u8),
    /// Text, expanded character by character through the active standard.
    Text(String),
    /// A nested list of values, flattened at any depth.
    List(Vec<SeqValue>),
}

impl From<u8> for SeqValue {
    fn from(b: u8) -> Self {
        Self::Byte(b)
    }
}

impl From<char> for SeqValue {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<&str> for SeqValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for SeqValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<SeqValue>> From<Vec<T>> for SeqValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// An accumulating canonical byte sequence, ready to send to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u8>,
    standard: Standard,
}

impl Sequence {
    /// Create an empty sequence for the given standard.
    #[must_use]
    pub const fn new(standard: Standard) -> Self {
        Self {
            values: Vec::new(),
            standard,
        }
    }

    /// Create a sequence from an initial value.
    #[must_use]
    pub fn from_value(value: impl Into<SeqValue>, standard: Standard) -> Self {
        let mut seq = Self::new(standard);
        seq.push(value);
        seq
    }

    /// Canonicalize and append a value.
    pub fn push(&mut self, value: impl Into<SeqValue>) {
        let value = value.into();
        self.values.extend(self.standard.canonicalize(&value));
    }

    /// The canonical bytes accumulated so far.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.values
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The standard this sequence canonicalizes with.
    #[inline]
    #[must_use]
    pub const fn standard(&self) -> Standard {
        self.standard
    }

    /// Compare against anything canonicalizable under the same standard.
    #[must_use]
    pub fn matches(&self, other: impl Into<SeqValue>) -> bool {
        let other = other.into();
        self.values == self.standard.canonicalize(&other)
    }

    /// Decode the accumulated bytes back into text.
    #[must_use]
    pub fn decode(&self) -> String {
        self.standard.decode(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonicalize_flattens_nested_lists() {
        let value = SeqValue::from(vec![
            SeqValue::from("dd"),
            SeqValue::from(32u8),
            SeqValue::from(vec![SeqValue::from("dd"), SeqValue::from(32u8)]),
        ]);
        assert_eq!(
            Standard::Videotex.canonicalize(&value),
            vec![100, 100, 32, 100, 100, 32]
        );
    }

    #[test]
    fn ascii_passes_through_one_byte_each() {
        let bytes = Standard::Videotex.canonicalize(&SeqValue::from("Hello 123!"));
        assert_eq!(bytes, b"Hello 123!".to_vec());
    }

    #[test]
    fn accented_chars_expand_per_standard() {
        assert_eq!(
            Standard::Videotex.canonicalize(&SeqValue::from("é")),
            vec![0x19, 0x42, 0x65]
        );
        assert_eq!(
            Standard::Teleinformatique.canonicalize(&SeqValue::from("é")),
            vec![0x0E, 0x7B, 0x0F]
        );
        assert_eq!(
            Standard::Mixed.canonicalize(&SeqValue::from("ç")),
            vec![0x0E, 0x5C, 0x0F]
        );
    }

    #[test]
    fn unmapped_char_degrades_to_low_order_byte() {
        // U+0152 is mapped in Videotex but not in the reduced table.
        assert_eq!(
            Standard::Teleinformatique.canonicalize(&SeqValue::from("Œ")),
            vec![0x52]
        );
    }

    #[test]
    fn forward_table_round_trips() {
        for (c, bytes) in VIDEOTEX_FORWARD {
            if *c == 'β' {
                // Aliased onto the sharp-s sequence; decodes as 'ß'.
                continue;
            }
            let encoded = Standard::Videotex.canonicalize(&SeqValue::from(*c));
            assert_eq!(&encoded, bytes);
            assert_eq!(Standard::Videotex.decode(&encoded), c.to_string());
        }
    }

    #[test]
    fn videotex_decode_prefers_longest_match() {
        // 0x19 0x42 0x65 is 'é'; decoding must not stop at the bare 0x42.
        let data = [0x19, 0x42, 0x65, 0x21];
        assert_eq!(Standard::Videotex.decode(&data), "é!");
    }

    #[test]
    fn reduced_decode_drops_control_bytes() {
        let data = [0x00, 0x1B, b'o', 0x0D, b'k', 0x0A, 0x7F];
        assert_eq!(Standard::Teleinformatique.decode(&data), "ok");
    }

    #[test]
    fn sequence_accumulates_and_matches() {
        let mut seq = Sequence::new(Standard::Videotex);
        seq.push("ab");
        seq.push(0x20u8);
        assert_eq!(seq.len(), 3);
        assert!(seq.matches(vec![
            SeqValue::from('a'),
            SeqValue::from('b'),
            SeqValue::from(0x20u8),
        ]));
        assert_eq!(seq.decode(), "ab ");
    }

    fn arb_seq_value() -> impl Strategy<Value = SeqValue> {
        let leaf = prop_oneof![
            any::<u8>().prop_map(SeqValue::Byte),
            "[ -~éàçù]{0,6}".prop_map(SeqValue::Text),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(SeqValue::List)
        })
    }

    proptest! {
        #[test]
        fn canonicalize_is_associative_under_concatenation(
            a in arb_seq_value(),
            b in arb_seq_value(),
        ) {
            for standard in [Standard::Videotex, Standard::Mixed, Standard::Teleinformatique] {
                let joined = standard.canonicalize(
                    &SeqValue::List(vec![a.clone(), b.clone()]),
                );
                let mut parts = standard.canonicalize(&a);
                parts.extend(standard.canonicalize(&b));
                prop_assert_eq!(&joined, &parts);
            }
        }
    }
}
