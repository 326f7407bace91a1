use thiserror::Error;

/// Failures of the write protocol. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A bulk copy asked for bytes outside of its source slice.
    #[error("source range {offset}..{offset}+{count} is out of bounds for a slice of {len} bytes")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// `discard` was called on a buffer with nothing in it.
    #[error("cannot discard from an empty buffer")]
    Underflow,
}

/// Reasons the experimental-API gate refuses a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("compiled header not available: {0}")]
    ResourceUnavailable(&'static str),

    #[error("experimental API can only be used by callers built with preview enabled")]
    PreviewRequired,
}

pub type Result<T, E = EncodingError> = core::result::Result<T, E>;
