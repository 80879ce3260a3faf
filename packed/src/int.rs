//! Packed integer encoding.
//!
//! Values in `-119..=119` take a single byte holding the value itself. Larger
//! magnitudes are stored as a control byte carrying the sign and payload
//! length, followed by the distance from the bias, least significant byte
//! first.

use crate::band::{Format, Width};
use crate::codec;
use crate::error::PackedResult;

/// Writes `value` at `offset` and returns the offset after the written bytes.
///
/// Exactly [`write_int_len`] bytes are written. If the buffer cannot hold
/// them, nothing is written.
///
/// # Errors
///
/// Returns [`PackedError::BufferTooShort`](crate::PackedError::BufferTooShort)
/// if `buf` has fewer than `write_int_len(value)` bytes from `offset`.
pub fn write_int(buf: &mut [u8], offset: usize, value: i32) -> PackedResult<usize> {
    codec::write(Format::Packed, i64::from(value), buf, offset)
}

/// Returns the number of bytes [`write_int`] emits for `value`.
#[must_use]
pub fn write_int_len(value: i32) -> usize {
    codec::encoded_len(Format::Packed, i64::from(value))
}

/// Returns the length of the packed `i32` at `offset`.
///
/// Only the control byte is inspected; the payload does not have to be
/// present yet.
pub fn read_int_len(buf: &[u8], offset: usize) -> PackedResult<usize> {
    codec::control_at(Format::Packed, Width::Int, buf, offset)
        .map(|control| control.encoded_len())
}

/// Reads the packed `i32` at `offset`.
///
/// Consumes exactly [`read_int_len`] bytes.
pub fn read_int(buf: &[u8], offset: usize) -> PackedResult<i32> {
    codec::read(Format::Packed, Width::Int, buf, offset).map(|value| value as i32)
}

/// Writes `value` at `offset` and returns the offset after the written bytes.
pub fn write_long(buf: &mut [u8], offset: usize, value: i64) -> PackedResult<usize> {
    codec::write(Format::Packed, value, buf, offset)
}

/// Returns the number of bytes [`write_long`] emits for `value`.
#[must_use]
pub fn write_long_len(value: i64) -> usize {
    codec::encoded_len(Format::Packed, value)
}

/// Returns the length of the packed `i64` at `offset`.
pub fn read_long_len(buf: &[u8], offset: usize) -> PackedResult<usize> {
    codec::control_at(Format::Packed, Width::Long, buf, offset)
        .map(|control| control.encoded_len())
}

/// Reads the packed `i64` at `offset`.
pub fn read_long(buf: &[u8], offset: usize) -> PackedResult<i64> {
    codec::read(Format::Packed, Width::Long, buf, offset)
}
