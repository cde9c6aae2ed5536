//! The fixed byte-to-entity table.
//!
//! Only five characters are ever rewritten. The table is constant data; there
//! is no way to register more.

pub(crate) const AMP: &[u8] = b"&amp;";
pub(crate) const LT: &[u8] = b"&lt;";
pub(crate) const GT: &[u8] = b"&gt;";
pub(crate) const APOS: &[u8] = b"&#x27;";
pub(crate) const QUOT: &[u8] = b"&quot;";

/// Bytes that end a pass-through run inside a string literal.
///
/// `"` closes the string, `\` starts an escape, the rest are substituted.
pub(crate) const STRING_SPECIALS: &[u8] = b"\"\\&<>'";

/// Entity for a raw byte found inside a string literal.
///
/// A raw `"` never reaches this point (it terminates the string), so it is
/// deliberately absent.
#[inline]
pub(crate) fn for_literal(b: u8) -> Option<&'static [u8]> {
    match b {
        b'&' => Some(AMP),
        b'<' => Some(LT),
        b'>' => Some(GT),
        b'\'' => Some(APOS),
        _ => None,
    }
}

/// Entity for a character that arrived as an escape (`\"` or `\u00XX`).
#[inline]
pub(crate) fn for_escaped(b: u8) -> Option<&'static [u8]> {
    match b {
        b'"' => Some(QUOT),
        _ => for_literal(b),
    }
}
