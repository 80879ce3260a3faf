//! Error types for tuple operations.

use std::fmt;

use packed::PackedError;

/// Result type for tuple operations.
pub type TupleResult<T> = Result<T, TupleError>;

/// Errors that can occur while reading or writing tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TupleError {
    /// Attempted to read past the end of the tuple.
    UnexpectedEnd { requested: usize, available: usize },

    /// A packed integer could not be encoded or decoded.
    Packed(PackedError),

    /// Entry is larger than the configured limit.
    EntryTooLarge { len: usize, limit: usize },

    /// Binding finished reading with bytes left in the entry.
    TrailingBytes { remaining: usize },
}

impl From<PackedError> for TupleError {
    fn from(err: PackedError) -> Self {
        Self::Packed(err)
    }
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd {
                requested,
                available,
            } => {
                write!(
                    f,
                    "unexpected end of tuple: need {requested} bytes, have {available}"
                )
            }
            Self::Packed(err) => write!(f, "packed integer error: {err}"),
            Self::EntryTooLarge { len, limit } => {
                write!(f, "entry too large: {len} > {limit} bytes")
            }
            Self::TrailingBytes { remaining } => {
                write!(f, "{remaining} trailing bytes after binding")
            }
        }
    }
}

impl std::error::Error for TupleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Packed(err) => Some(err),
            _ => None,
        }
    }
}
