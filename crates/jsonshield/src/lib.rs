//! A streaming filter that makes already-serialized JSON safe to embed in
//! HTML.
//!
//! [`HtmlSafeEncoder`] sits between a JSON encoder and an output sink. Inside
//! string literals it replaces `<`, `>`, `&` and `'` with their HTML entities,
//! and does the same for an escaped quote (`\"`) and for the `\u00XX` forms of
//! all five characters. Structural JSON and scalar tokens pass through
//! untouched. Input may arrive in chunks of any size, split anywhere: the
//! output is byte-for-byte what a single call over the whole document would
//! have produced.
//!
//! ```rust
//! use jsonshield::HtmlSafeEncoder;
//!
//! let mut encoder = HtmlSafeEncoder::new(Vec::new());
//! encoder.process(br#"{"html":"<b>Tom "#).unwrap();
//! encoder.process(br#"& Jerry</b>"}"#).unwrap();
//! let out = encoder.finish().unwrap();
//! assert_eq!(out, br#"{"html":"&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunk_utils;
mod diagnostic;
mod encoder;
mod entity;
mod error;
mod escape_buffer;
mod sink;
#[cfg(feature = "std")]
mod writer;

#[cfg(test)]
mod tests;

pub use chunk_utils::{produce_chunks, split_at_seed};
pub use diagnostic::is_plausibly_escaped;
pub use encoder::{HtmlSafeEncoder, escape_to_vec};
pub use error::EncodeError;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::Sink;
