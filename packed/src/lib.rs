//! Packed variable-length integer encodings for tuple entries.
//!
//! This crate encodes signed integers into caller-provided byte buffers at
//! explicit offsets, using as few bytes as the value needs. Two layouts are
//! provided:
//!
//! - **Packed** ([`write_int`], [`read_int`], ...) - the compact layout.
//!   Values in `-119..=119` take one byte, `i32` values at most five.
//! - **Sorted** ([`write_sorted_int`], [`read_sorted_int`], ...) - the same
//!   band structure, laid out so encodings sort bytewise like the values.
//!
//! The encoded length is known before writing ([`write_int_len`]) and from the
//! control byte alone before reading ([`read_int_len`]).
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked; a failed
//!   write leaves the buffer unchanged.
//! - **One band table** - Length prediction and encoding share
//!   [`PAYLOAD_BANDS`], so they cannot disagree.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! See `FORMAT.md` for the byte layout.
//!
//! # Example
//!
//! ```
//! use packed::{read_int, read_int_len, write_int, write_int_len};
//!
//! let mut buf = [0u8; 5];
//! let end = write_int(&mut buf, 0, 1000).unwrap();
//! assert_eq!(end, write_int_len(1000));
//!
//! assert_eq!(read_int_len(&buf, 0).unwrap(), end);
//! assert_eq!(read_int(&buf, 0).unwrap(), 1000);
//! ```

mod band;
mod codec;
mod error;
mod int;
mod sorted;

pub use band::{
    value_bands, Band, Control, Format, ValueBand, Width, BIAS, MAX_INT_LEN, MAX_LONG_LEN,
    PAYLOAD_BANDS,
};
pub use error::{PackedError, PackedResult};
pub use int::{
    read_int, read_int_len, read_long, read_long_len, write_int, write_int_len, write_long,
    write_long_len,
};
pub use sorted::{
    read_sorted_int, read_sorted_int_len, read_sorted_long, read_sorted_long_len,
    write_sorted_int, write_sorted_int_len, write_sorted_long, write_sorted_long_len,
};

/// Returns the length of the encoding at `offset` for any format and width.
///
/// Only the control byte is inspected.
pub fn read_len(format: Format, width: Width, buf: &[u8], offset: usize) -> PackedResult<usize> {
    codec::control_at(format, width, buf, offset).map(|control| control.encoded_len())
}

/// Reads the encoding at `offset` for any format and width.
pub fn read(format: Format, width: Width, buf: &[u8], offset: usize) -> PackedResult<i64> {
    codec::read(format, width, buf, offset)
}

/// Returns the encoded length of `value` in the given format.
#[must_use]
pub fn write_len(format: Format, value: i64) -> usize {
    codec::encoded_len(format, value)
}

/// Writes `value` at `offset` in the given format.
pub fn write(format: Format, buf: &mut [u8], offset: usize, value: i64) -> PackedResult<usize> {
    codec::write(format, value, buf, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = BIAS;
        let _ = MAX_INT_LEN;
        let _ = MAX_LONG_LEN;
        let _ = PAYLOAD_BANDS;
        let _ = value_bands(Format::Packed, Width::Int);

        // Error types
        let _: PackedResult<()> = Ok(());
    }

    #[test]
    fn max_lengths_match_widths() {
        assert_eq!(MAX_INT_LEN, Width::Int.max_len());
        assert_eq!(MAX_LONG_LEN, Width::Long.max_len());
    }

    #[test]
    fn generic_entry_points_agree() {
        let mut generic = [0u8; 9];
        let mut specific = [0u8; 9];
        for value in [-1_000_000i32, -120, 0, 120, 65_655] {
            let end = write(Format::Packed, &mut generic, 0, i64::from(value)).unwrap();
            write_int(&mut specific, 0, value).unwrap();
            assert_eq!(generic, specific);
            assert_eq!(end, write_len(Format::Packed, i64::from(value)));
            assert_eq!(read_len(Format::Packed, Width::Int, &generic, 0).unwrap(), end);
            assert_eq!(
                read(Format::Packed, Width::Int, &generic, 0).unwrap(),
                i64::from(value)
            );

            write(Format::Sorted, &mut generic, 0, i64::from(value)).unwrap();
            write_sorted_int(&mut specific, 0, value).unwrap();
            assert_eq!(generic, specific);
        }
    }

    #[test]
    fn doctest_example() {
        let mut buf = [0u8; 5];
        let end = write_int(&mut buf, 0, 1000).unwrap();
        assert_eq!(end, write_int_len(1000));
        assert_eq!(read_int_len(&buf, 0).unwrap(), end);
        assert_eq!(read_int(&buf, 0).unwrap(), 1000);
    }
}
