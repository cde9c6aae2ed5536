//! `std::io::Write` on top of the encoder.
//!
//! This lets any writer-based JSON serializer stream straight through the
//! filter:
//!
//! ```rust
//! use jsonshield::{HtmlSafeEncoder, IoSink};
//!
//! let mut page = Vec::new();
//! let mut encoder = HtmlSafeEncoder::new(IoSink(&mut page));
//! std::io::Write::write_all(&mut encoder, br#"{"title":"Q&A"}"#).unwrap();
//! encoder.finish().unwrap();
//! assert_eq!(page, br#"{"title":"Q&amp;A"}"#);
//! ```
//!
//! A write that fails part-way has still advanced the scan over the bytes
//! before the failure, so retrying the same buffer duplicates output.

use alloc::boxed::Box;
use core::error::Error;
use std::io;

use crate::{EncodeError, HtmlSafeEncoder, Sink};

/// Turn a sink failure into an `io::Error`, keeping the original error when
/// the sink already speaks `io`.
fn into_io_error<E>(err: EncodeError<E>) -> io::Error
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let boxed: Box<dyn Error + Send + Sync> = err.into_sink_error().into();
    match boxed.downcast::<io::Error>() {
        Ok(e) => *e,
        Err(other) => io::Error::other(other),
    }
}

impl<S> io::Write for HtmlSafeEncoder<S>
where
    S: Sink,
    S::Error: Into<Box<dyn Error + Send + Sync>>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.process(buf).map_err(into_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        HtmlSafeEncoder::flush(self).map_err(into_io_error)
    }
}
