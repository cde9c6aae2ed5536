use thiserror::Error;

/// Error returned by [`HtmlSafeEncoder`](crate::HtmlSafeEncoder).
///
/// The scan itself never fails: malformed JSON passes through. The only
/// failure is the downstream sink refusing a write.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError<E> {
    /// The sink failed to accept a write.
    #[error("sink write failed: {0}")]
    Sink(#[source] E),
}

impl<E> EncodeError<E> {
    /// Unwrap the sink's own error.
    #[must_use]
    pub fn into_sink_error(self) -> E {
        match self {
            EncodeError::Sink(e) => e,
        }
    }
}
