//! Error type returned when the wrapped sink fails.

use std::io;

/// A sink write failed while reflowing input.
///
/// Carries the number of input bytes the writer had consumed when the failure
/// happened, counting the character whose processing triggered the failing
/// write. The writer keeps its pending word and whitespace as they were at
/// that point.
#[derive(Debug, thiserror::Error)]
#[error("sink write failed after consuming {consumed} input bytes")]
pub struct WrapError {
    consumed: usize,
    #[source]
    source: io::Error,
}

impl WrapError {
    pub(crate) fn new(consumed: usize, source: io::Error) -> Self { Self { consumed, source } }

    /// Input bytes consumed before the sink failed.
    #[must_use]
    pub fn consumed(&self) -> usize { self.consumed }

    /// Kind of the underlying sink error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind { self.source.kind() }

    /// Discard the byte count and return the sink error.
    #[must_use]
    pub fn into_io(self) -> io::Error { self.source }
}

impl From<WrapError> for io::Error {
    fn from(err: WrapError) -> Self { io::Error::new(err.kind(), err) }
}
