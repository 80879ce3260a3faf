//! Error types for packed integer operations.

use std::fmt;

use crate::band::Width;

/// Result type for packed integer operations.
pub type PackedResult<T> = Result<T, PackedError>;

/// Errors that can occur while encoding or decoding packed integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackedError {
    /// The buffer does not hold enough bytes at the given offset.
    ///
    /// Writes check capacity before touching the buffer, so a failed write
    /// leaves it unchanged.
    BufferTooShort {
        /// Offset the operation started at.
        offset: usize,
        /// Number of bytes the operation needs from `offset`.
        needed: usize,
        /// Number of bytes available from `offset`.
        available: usize,
    },

    /// Control byte announces more payload bytes than the width allows.
    InvalidControl {
        /// The control byte found.
        byte: u8,
        /// Width being decoded.
        width: Width,
    },

    /// Decoded value does not fit the requested width.
    ValueOutOfRange {
        /// The decoded value.
        value: i128,
        /// Width being decoded.
        width: Width,
    },
}

impl PackedError {
    pub(crate) fn short(offset: usize, needed: usize, len: usize) -> Self {
        Self::BufferTooShort {
            offset,
            needed,
            available: len.saturating_sub(offset),
        }
    }
}

impl fmt::Display for PackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "buffer too short at offset {offset}: need {needed} bytes, have {available}"
                )
            }
            Self::InvalidControl { byte, width } => {
                write!(f, "invalid control byte 0x{byte:02X} for {width}")
            }
            Self::ValueOutOfRange { value, width } => {
                write!(f, "decoded value {value} does not fit {width}")
            }
        }
    }
}

impl std::error::Error for PackedError {}
