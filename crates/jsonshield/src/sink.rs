//! The downstream side of the encoder.

use alloc::vec::Vec;
use core::convert::Infallible;

/// A consumer of escaped output bytes.
///
/// Writes are issued in input order and each call must either take the whole
/// slice or fail. The encoder performs no buffering of its own beyond a
/// pending escape sequence, so any batching is up to the sink.
pub trait Sink {
    /// Error produced when a write is refused.
    type Error;

    /// Accept all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the bytes could not be accepted.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Push anything the sink itself has buffered further downstream.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if flushing failed.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Adapts any [`std::io::Write`] into a [`Sink`].
///
/// ```rust
/// use jsonshield::{HtmlSafeEncoder, IoSink};
///
/// let mut out = std::io::Cursor::new(Vec::new());
/// let mut encoder = HtmlSafeEncoder::new(IoSink(&mut out));
/// encoder.process(br#"["a<b"]"#).unwrap();
/// encoder.finish().unwrap();
/// assert_eq!(out.into_inner(), br#"["a&lt;b"]"#);
/// ```
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}
