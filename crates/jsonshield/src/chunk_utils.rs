use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized byte chunks.
///
/// Unlike a text splitter this happily cuts through multi-byte UTF-8 code
/// points and escape sequences, which is exactly what the encoder has to
/// survive.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` into non-empty chunks whose sizes are derived from
/// `seed`.
///
/// Each chunk is `seed % remaining + 1` bytes, so a zero seed yields single
/// bytes. The same seed always produces the same partition. Each chunk is at least
/// one byte long and the chunks concatenate back to `payload`.
#[must_use]
pub fn split_at_seed(payload: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = payload.len();

    while start < len {
        let remaining = len - start;
        #[allow(clippy::cast_possible_truncation)]
        let size = (seed % remaining as u64) as usize + 1;
        chunks.push(&payload[start..start + size]);
        start += size;
    }

    chunks
}
