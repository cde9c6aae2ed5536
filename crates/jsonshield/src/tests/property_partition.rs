use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use super::utils::{assert_valid_json, encode_chunks, html_escape};

/// Byte soup biased towards the sequences the encoder treats specially.
#[derive(Debug, Clone)]
struct Jsonish(Vec<u8>);

const PIECES: &[&str] = &[
    "\"", "\\", "u", "\\u", "00", "3c", "3C", "3e", "26", "27", "22", "23", "18", "zz", "<", ">",
    "&", "'", "a", " ", "{", "}", "[", "]", ":", ",", "1", "null", "\u{e9}", "\\n", "\\\"",
];

impl Arbitrary for Jsonish {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        let mut bytes = Vec::new();
        for _ in 0..len {
            bytes.extend_from_slice(g.choose(PIECES).unwrap().as_bytes());
        }
        Self(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

fn tests() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Property: feeding the input in arbitrary chunk sizes yields exactly the
/// bytes of a single call over the whole input.
#[test]
fn partition_matches_whole_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Jsonish, splits: Vec<usize>) -> bool {
        let src = &input.0[..];
        let whole = encode_chunks([src]);

        let mut chunks = Vec::new();
        let mut idx = 0;
        for s in splits {
            let remaining = src.len() - idx;
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            chunks.push(&src[idx..idx + size]);
            idx += size;
        }
        if idx < src.len() {
            chunks.push(&src[idx..]);
        }

        encode_chunks(chunks) == whole
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Jsonish, Vec<usize>) -> bool);
}

/// Property: any string serialized by `serde_json` comes out as valid JSON
/// whose decoded value is the original with entities substituted.
#[test]
fn serialized_strings_stay_valid_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String, seed: u64) -> bool {
        let raw = serde_json::to_vec(&[s.as_str()]).unwrap();
        let out = encode_chunks(crate::split_at_seed(&raw, seed));
        let Ok(out) = String::from_utf8(out) else {
            return false;
        };
        let value = assert_valid_json(&out);
        value[0].as_str() == Some(html_escape(&s).as_str())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, u64) -> bool);
}

/// Without a quote nothing is ever inside a string, so nothing changes.
#[quickcheck]
fn quote_free_input_is_identity(bytes: Vec<u8>) -> bool {
    let input: Vec<u8> = bytes.into_iter().filter(|&b| b != b'"').collect();
    encode_chunks([&input[..]]) == input
}
