//! Sorted packed integer encoding.
//!
//! Same band structure as the packed encoding, laid out so that comparing
//! two encodings as unsigned byte strings orders them like the values:
//!
//! - `-119..=120` is one byte, `value + 127` (`0x08..=0xF7`).
//! - Larger values use control `0xF7 + n` and `value - 121` in `n` big-endian
//!   bytes.
//! - Smaller values use control `0x08 - n` and the low `n` bytes of
//!   `value + 119`, big-endian.

use crate::band::{Format, Width};
use crate::codec;
use crate::error::PackedResult;

/// Writes `value` at `offset` and returns the offset after the written bytes.
pub fn write_sorted_int(buf: &mut [u8], offset: usize, value: i32) -> PackedResult<usize> {
    codec::write(Format::Sorted, i64::from(value), buf, offset)
}

/// Returns the number of bytes [`write_sorted_int`] emits for `value`.
#[must_use]
pub fn write_sorted_int_len(value: i32) -> usize {
    codec::encoded_len(Format::Sorted, i64::from(value))
}

/// Returns the length of the sorted packed `i32` at `offset`.
pub fn read_sorted_int_len(buf: &[u8], offset: usize) -> PackedResult<usize> {
    codec::control_at(Format::Sorted, Width::Int, buf, offset)
        .map(|control| control.encoded_len())
}

/// Reads the sorted packed `i32` at `offset`.
pub fn read_sorted_int(buf: &[u8], offset: usize) -> PackedResult<i32> {
    codec::read(Format::Sorted, Width::Int, buf, offset).map(|value| value as i32)
}

/// Writes `value` at `offset` and returns the offset after the written bytes.
pub fn write_sorted_long(buf: &mut [u8], offset: usize, value: i64) -> PackedResult<usize> {
    codec::write(Format::Sorted, value, buf, offset)
}

/// Returns the number of bytes [`write_sorted_long`] emits for `value`.
#[must_use]
pub fn write_sorted_long_len(value: i64) -> usize {
    codec::encoded_len(Format::Sorted, value)
}

/// Returns the length of the sorted packed `i64` at `offset`.
pub fn read_sorted_long_len(buf: &[u8], offset: usize) -> PackedResult<usize> {
    codec::control_at(Format::Sorted, Width::Long, buf, offset)
        .map(|control| control.encoded_len())
}

/// Reads the sorted packed `i64` at `offset`.
pub fn read_sorted_long(buf: &[u8], offset: usize) -> PackedResult<i64> {
    codec::read(Format::Sorted, Width::Long, buf, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackedError;

    fn encode_long(value: i64) -> Vec<u8> {
        let mut buf = vec![0u8; 9];
        let end = write_sorted_long(&mut buf, 0, value).unwrap();
        buf.truncate(end);
        buf
    }

    #[test]
    fn single_byte_values() {
        assert_eq!(encode_long(0), vec![0x7F]);
        assert_eq!(encode_long(-119), vec![0x08]);
        assert_eq!(encode_long(120), vec![0xF7]);
    }

    #[test]
    fn known_multi_byte_layouts() {
        assert_eq!(encode_long(121), vec![0xF8, 0x00]);
        assert_eq!(encode_long(376), vec![0xF8, 0xFF]);
        assert_eq!(encode_long(377), vec![0xF9, 0x01, 0x00]);
        assert_eq!(encode_long(-120), vec![0x07, 0xFF]);
        assert_eq!(encode_long(-375), vec![0x07, 0x00]);
        assert_eq!(encode_long(-376), vec![0x06, 0xFE, 0xFF]);
        assert_eq!(encode_long(i64::MAX).len(), 9);
        assert_eq!(encode_long(i64::MIN)[0], 0x00);
    }

    #[test]
    fn int_extremes() {
        let mut buf = [0u8; 5];
        for value in [i32::MIN, i32::MAX, -120, 121, 0] {
            let end = write_sorted_int(&mut buf, 0, value).unwrap();
            assert_eq!(end, write_sorted_int_len(value));
            assert_eq!(read_sorted_int_len(&buf, 0).unwrap(), end);
            assert_eq!(read_sorted_int(&buf, 0).unwrap(), value);
        }
        assert_eq!(write_sorted_int_len(i32::MIN), 5);
        assert_eq!(write_sorted_int_len(i32::MAX), 5);
    }

    #[test]
    fn byte_order_follows_value_order() {
        let values = [
            i64::MIN,
            -1 << 40,
            -65_656,
            -376,
            -375,
            -120,
            -119,
            0,
            120,
            121,
            376,
            377,
            1 << 40,
            i64::MAX,
        ];
        for pair in values.windows(2) {
            assert!(
                encode_long(pair[0]) < encode_long(pair[1]),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn int_rejects_long_control() {
        let bytes = encode_long(1 << 40);
        assert!(matches!(
            read_sorted_int_len(&bytes, 0),
            Err(PackedError::InvalidControl { .. })
        ));
    }

    #[test]
    fn int_rejects_decoded_overflow() {
        let buf = [0xFB, 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(matches!(
            read_sorted_int(&buf, 0),
            Err(PackedError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn short_buffer_fails() {
        let mut buf = [0u8; 2];
        assert!(matches!(
            write_sorted_int(&mut buf, 0, 1 << 20),
            Err(PackedError::BufferTooShort { .. })
        ));
        assert_eq!(buf, [0, 0]);
        assert!(read_sorted_long(&[0xF9, 0x01], 0).is_err());
    }
}
