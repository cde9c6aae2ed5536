//! Scratch space for a `\uXXXX` escape that may straddle chunk boundaries.
//!
//! The [`UnicodeEscapeBuffer`] holds the raw bytes of an in-progress escape,
//! the leading `\u` included, so that when the sequence turns out not to name
//! one of the escaped characters it can be written back out verbatim.
//!
//! Decoding never fails. Anything that is not four hexadecimal digits, or
//! that names a code point above `0xFF`, simply has no low byte to match.

/// Raw bytes of a pending `\uXXXX` sequence.
#[derive(Debug, Clone)]
pub(crate) struct UnicodeEscapeBuffer {
    raw: [u8; 6],
    len: u8,
}

const PREFIX: usize = 2;

impl UnicodeEscapeBuffer {
    /// Creates a buffer holding just the `\u` prefix.
    pub fn new() -> Self {
        Self {
            raw: [b'\\', b'u', 0, 0, 0, 0],
            len: 0,
        }
    }

    /// Forget any accumulated digits.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Number of digits stored so far.
    pub fn digits(&self) -> u8 {
        self.len
    }

    /// Store one digit. The caller guarantees fewer than three are stored;
    /// the fourth goes through [`Self::completed_with`].
    pub fn push(&mut self, b: u8) {
        debug_assert!(self.len < 3, "fourth digit must complete the escape");
        self.raw[PREFIX + self.len as usize] = b;
        self.len += 1;
    }

    /// The full six-byte sequence that `b` would complete, without storing
    /// it.
    pub fn completed_with(&self, b: u8) -> [u8; 6] {
        debug_assert_eq!(self.len, 3);
        let mut seq = self.raw;
        seq[PREFIX + 3] = b;
        seq
    }

    /// The bytes held so far, `\u` prefix included.
    pub fn pending(&self) -> &[u8] {
        &self.raw[..PREFIX + self.len as usize]
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some(u16::from(b - b'0')),
            b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
            b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
            _ => None,
        }
    }

    /// Decode a complete `\uXXXX` sequence to the byte it names.
    ///
    /// Returns `None` for malformed digits and for code points that do not
    /// fit in a single byte.
    pub fn decode_low_byte(seq: &[u8; 6]) -> Option<u8> {
        let mut acc: u16 = 0;
        for &b in &seq[PREFIX..] {
            acc = (acc << 4) | Self::hex_val(b)?;
        }
        u8::try_from(acc).ok()
    }
}
