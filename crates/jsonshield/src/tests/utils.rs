use alloc::{string::String, vec::Vec};

use crate::HtmlSafeEncoder;

/// Run `chunks` through a fresh encoder, finishing the stream.
pub(crate) fn encode_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut encoder = HtmlSafeEncoder::new(Vec::new());
    for chunk in chunks {
        assert_eq!(encoder.process(chunk).unwrap(), chunk.len());
    }
    encoder.finish().unwrap()
}

pub(crate) fn encode_str(raw: &str) -> String {
    String::from_utf8(encode_chunks([raw.as_bytes()])).unwrap()
}

/// What a string value should decode to after filtering.
pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#x27;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[track_caller]
pub(crate) fn assert_valid_json(s: &str) -> serde_json::Value {
    match serde_json::from_str(s) {
        Ok(value) => value,
        Err(e) => panic!("output was not JSON ({e}): {s}"),
    }
}
