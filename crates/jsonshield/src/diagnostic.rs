use bstr::ByteSlice;

/// Best-effort check that `s` looks like text that has already been HTML
/// escaped.
///
/// Returns `false` if `s` contains any of `<`, `>`, `'` or `"`. Otherwise
/// returns `true`. An `&` is accepted without checking that it starts a
/// well-formed entity, so `"a & b"` counts as escaped.
///
/// This is a sanity check for tooling and tests. [`HtmlSafeEncoder`] does not
/// consult it and its answer is no guarantee of safety.
///
/// ```rust
/// use jsonshield::is_plausibly_escaped;
///
/// assert!(is_plausibly_escaped("&lt;b&gt;"));
/// assert!(!is_plausibly_escaped("<b>"));
/// ```
///
/// [`HtmlSafeEncoder`]: crate::HtmlSafeEncoder
#[must_use]
pub fn is_plausibly_escaped(s: impl AsRef<[u8]>) -> bool {
    let s = s.as_ref();
    if s.find_byteset(b"<>'\"").is_some() {
        return false;
    }
    if s.find_byte(b'&').is_none() {
        return true;
    }
    // TODO: look past each `&` for a named or numeric entity reference
    // instead of accepting any ampersand.
    true
}
