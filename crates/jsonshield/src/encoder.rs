//! The streaming HTML-safety filter.
//!
//! The encoder is a byte-at-a-time state machine over JSON text. Outside
//! string literals every byte is copied. Inside them `<`, `>`, `&` and `'`
//! become entities, and so do `\"` and any `\uXXXX` escape naming one of the
//! five characters. Other escapes are copied verbatim.
//!
//! Buffering
//! - Runs of bytes that need no rewriting are written to the sink as one
//!   slice of the caller's chunk. The run is cut at every substitution, at
//!   every backslash, and at the end of the chunk.
//! - A backslash and whatever follows it up to the end of the escape never
//!   go through the run. They live in the scan state, so an escape split
//!   across `process` calls resolves exactly as if it had arrived whole.
//!
//! Failure
//! - The state for a byte is committed only after the writes that byte
//!   causes have succeeded. A sink error therefore leaves the state as it was
//!   before the failing write.

use alloc::vec::Vec;

use bstr::ByteSlice;
use tracing::{debug, trace};

use crate::{
    entity::{self, STRING_SPECIALS},
    error::EncodeError,
    escape_buffer::UnicodeEscapeBuffer,
    sink::Sink,
};

/// Lexical position relative to JSON string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Top,
    InString,
    SawBackslash,
    /// Expecting the first hex digit after `\u`.
    Unicode1,
    Unicode2,
    Unicode3,
    /// Expecting the last hex digit; the escape resolves on the next byte.
    Unicode4,
}

#[derive(Debug, Clone)]
struct ScanState {
    mode: Mode,
    escape: UnicodeEscapeBuffer,
}

impl ScanState {
    fn new() -> Self {
        Self {
            mode: Mode::Top,
            escape: UnicodeEscapeBuffer::new(),
        }
    }
}

/// Rewrites a stream of serialized JSON so that string contents are safe to
/// place inside HTML.
///
/// One encoder handles one continuous stream. Feed it with [`process`] in
/// chunks of any size and call [`finish`] at the end of the stream. Chunk
/// boundaries never change the output.
///
/// ```rust
/// use jsonshield::HtmlSafeEncoder;
///
/// let mut encoder = HtmlSafeEncoder::new(Vec::new());
/// for chunk in [&br#"{"q":"it\u00"#[..], &br#"27s"}"#[..]] {
///     encoder.process(chunk).unwrap();
/// }
/// assert_eq!(encoder.finish().unwrap(), br#"{"q":"it&#x27;s"}"#);
/// ```
///
/// [`process`]: HtmlSafeEncoder::process
/// [`finish`]: HtmlSafeEncoder::finish
#[derive(Debug)]
pub struct HtmlSafeEncoder<S> {
    sink: S,
    state: ScanState,
}

#[inline]
fn emit<S: Sink>(sink: &mut S, bytes: &[u8]) -> Result<(), EncodeError<S::Error>> {
    if bytes.is_empty() {
        return Ok(());
    }
    sink.write_bytes(bytes).map_err(|e| {
        debug!(len = bytes.len(), "sink rejected write");
        EncodeError::Sink(e)
    })
}

impl<S: Sink> HtmlSafeEncoder<S> {
    /// Creates an encoder writing to `sink`, positioned outside any string.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: ScanState::new(),
        }
    }

    /// Scan `chunk` and write its HTML-safe rendition to the sink.
    ///
    /// On success the whole chunk is accepted and its length is returned.
    /// Bytes belonging to an escape sequence that is still incomplete at the
    /// end of the chunk are held back until a later call completes it.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Sink`] as soon as the sink refuses a write.
    /// Malformed JSON is never an error.
    pub fn process(&mut self, chunk: &[u8]) -> Result<usize, EncodeError<S::Error>> {
        // `run` is the start of bytes scanned but not yet written.
        let mut run = 0;
        let mut pos = 0;

        while pos < chunk.len() {
            match self.state.mode {
                Mode::Top => match chunk[pos..].find_byte(b'"') {
                    Some(i) => {
                        pos += i + 1;
                        self.state.mode = Mode::InString;
                    }
                    None => pos = chunk.len(),
                },
                Mode::InString => {
                    let Some(i) = chunk[pos..].find_byteset(STRING_SPECIALS) else {
                        pos = chunk.len();
                        continue;
                    };
                    let at = pos + i;
                    match chunk[at] {
                        b'"' => {
                            pos = at + 1;
                            self.state.mode = Mode::Top;
                        }
                        b'\\' => {
                            // The backslash is held, not copied: an escape
                            // must never be split between two writes.
                            emit(&mut self.sink, &chunk[run..at])?;
                            pos = at + 1;
                            run = pos;
                            self.state.mode = Mode::SawBackslash;
                        }
                        special => {
                            emit(&mut self.sink, &chunk[run..at])?;
                            if let Some(entity) = entity::for_literal(special) {
                                emit(&mut self.sink, entity)?;
                            }
                            pos = at + 1;
                            run = pos;
                        }
                    }
                }
                Mode::SawBackslash => {
                    match chunk[pos] {
                        b'"' => {
                            emit(&mut self.sink, entity::QUOT)?;
                            self.state.mode = Mode::InString;
                        }
                        b'u' => {
                            self.state.escape.reset();
                            self.state.mode = Mode::Unicode1;
                        }
                        other => {
                            emit(&mut self.sink, &[b'\\', other])?;
                            self.state.mode = Mode::InString;
                        }
                    }
                    pos += 1;
                    run = pos;
                }
                Mode::Unicode1 | Mode::Unicode2 | Mode::Unicode3 => {
                    self.state.escape.push(chunk[pos]);
                    self.state.mode = match self.state.mode {
                        Mode::Unicode1 => Mode::Unicode2,
                        Mode::Unicode2 => Mode::Unicode3,
                        _ => Mode::Unicode4,
                    };
                    pos += 1;
                    run = pos;
                }
                Mode::Unicode4 => {
                    let seq = self.state.escape.completed_with(chunk[pos]);
                    match UnicodeEscapeBuffer::decode_low_byte(&seq).and_then(entity::for_escaped) {
                        Some(entity) => emit(&mut self.sink, entity)?,
                        None => emit(&mut self.sink, &seq)?,
                    }
                    self.state.escape.reset();
                    self.state.mode = Mode::InString;
                    pos += 1;
                    run = pos;
                }
            }
        }

        emit(&mut self.sink, &chunk[run..])?;
        Ok(chunk.len())
    }

    /// Flush the sink. Bytes of an unfinished escape stay pending.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Sink`] if the sink fails to flush.
    pub fn flush(&mut self) -> Result<(), EncodeError<S::Error>> {
        self.sink.flush().map_err(EncodeError::Sink)
    }

    /// End the stream and hand back the sink.
    ///
    /// A stream that stops inside an escape (a lone trailing `\`, or `\u`
    /// with fewer than four digits) is malformed; the held bytes are written
    /// out unchanged rather than dropped. The sink is flushed last.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Sink`] if writing the held bytes or flushing
    /// fails.
    pub fn finish(mut self) -> Result<S, EncodeError<S::Error>> {
        match self.state.mode {
            Mode::Top | Mode::InString => {}
            Mode::SawBackslash => {
                trace!("stream ended after a backslash");
                emit(&mut self.sink, b"\\")?;
            }
            Mode::Unicode1 | Mode::Unicode2 | Mode::Unicode3 | Mode::Unicode4 => {
                trace!(
                    digits = self.state.escape.digits(),
                    "stream ended inside a unicode escape"
                );
                emit(&mut self.sink, self.state.escape.pending())?;
            }
        }
        self.flush()?;
        Ok(self.sink)
    }

    /// Gets a reference to the underlying sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Gets a mutable reference to the underlying sink.
    ///
    /// Writing to the sink directly interleaves with the encoder's output.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwraps the encoder, returning the sink.
    ///
    /// Unlike [`finish`](Self::finish), any held escape bytes are discarded.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Encode a complete JSON text in one call.
///
/// ```rust
/// assert_eq!(
///     jsonshield::escape_to_vec(r#"{"a<b":"x>y"}"#),
///     br#"{"a&lt;b":"x&gt;y"}"#
/// );
/// ```
#[must_use]
pub fn escape_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    let input = input.as_ref();
    let mut encoder = HtmlSafeEncoder::new(Vec::with_capacity(input.len()));
    let Ok(_) = encoder.process(input);
    let Ok(out) = encoder.finish();
    out
}
