#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonshield::{HtmlSafeEncoder, escape_to_vec, split_at_seed};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

const HEADER: usize = 9; // 1 flag + 8-byte seed

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn encode_split(data: &[u8], seed: u64) -> Vec<u8> {
    let mut encoder = HtmlSafeEncoder::new(Vec::new());
    for chunk in split_at_seed(data, seed) {
        let n = encoder.process(chunk).unwrap();
        assert_eq!(n, chunk.len());
    }
    encoder.finish().unwrap()
}

fn check(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let seed = u64::from_le_bytes(data[1..HEADER].try_into().unwrap());
    let data = &data[HEADER..];

    if flags & 1 == 0 {
        // Raw bytes: chunking must never change the output.
        assert_eq!(encode_split(data, seed), escape_to_vec(data));
        return;
    }

    // Structured: a serialized document must stay valid JSON.
    let Ok(value) = ArbitraryValue::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    let serialized = serde_json::to_vec(&value.0).expect("serializable value");
    let escaped = encode_split(&serialized, seed);
    assert_eq!(escaped, escape_to_vec(&serialized));
    if let Err(e) = serde_json::from_slice::<Value>(&escaped) {
        panic!("escaped output is not JSON ({e}): {}", String::from_utf8_lossy(&escaped));
    }
}

fuzz_target!(|data: &[u8]| check(data));
