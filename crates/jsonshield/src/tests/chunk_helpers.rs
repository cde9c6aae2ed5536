use crate::{produce_chunks, split_at_seed};

#[test]
fn produce_helpers_example() {
    let payload = br#"["foo","bar"]"#;
    let chunks = produce_chunks(payload, 5);
    assert_eq!(
        chunks,
        ["[\"f", "oo\"", ",\"b", "ar\"", "]"].map(str::as_bytes)
    );
}

#[test]
fn produce_chunks_cuts_through_code_points() {
    let payload = "[\"f\u{1F60A}o\"]".as_bytes();
    let chunks = produce_chunks(payload, payload.len());
    assert_eq!(chunks.len(), payload.len());
    assert!(chunks.iter().all(|c| c.len() == 1));
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_more_parts_than_bytes() {
    let chunks = produce_chunks(b"ab", 10);
    assert_eq!(chunks, ["a", "b"].map(str::as_bytes));
    assert!(produce_chunks(b"", 3).is_empty());
}

#[test]
fn split_at_seed_is_deterministic_partition() {
    let payload = br#"{"key":"a \u003c b"}"#;
    for seed in [0, 1, 42, u64::MAX] {
        let chunks = split_at_seed(payload, seed);
        assert!(chunks.iter().all(|c| !c.is_empty()));
        assert_eq!(chunks.concat(), payload);
        assert_eq!(chunks, split_at_seed(payload, seed));
    }
}

#[test]
fn split_at_seed_sizes_follow_seed() {
    let payload = b"abcdefgh";
    assert_eq!(split_at_seed(payload, 0), produce_chunks(payload, 8));
    assert_eq!(split_at_seed(payload, 2), ["abc", "def", "g", "h"].map(str::as_bytes));
    assert_eq!(split_at_seed(payload, u64::MAX), [&payload[..]]);
    assert!(split_at_seed(b"", 7).is_empty());
}
