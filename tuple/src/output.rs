//! Growable tuple writer.

use packed::PackedResult;

use crate::entry::Entry;
use crate::error::TupleResult;

/// Writes primitive fields into a growable tuple buffer.
///
/// Signed fixed-width fields are written big-endian with the sign bit
/// flipped, so tuples made of them compare bytewise in numeric order.
/// Call [`finish`](Self::finish) or [`into_entry`](Self::into_entry) to take
/// the bytes.
#[derive(Debug, Default, Clone)]
pub struct TupleOutput {
    bytes: Vec<u8>,
}

impl TupleOutput {
    /// Creates a new empty `TupleOutput`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `TupleOutput` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Discards everything written, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and returns the bytes as an [`Entry`].
    #[must_use]
    pub fn into_entry(self) -> Entry {
        Entry::new(self.bytes)
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a boolean as a single `0` or `1` byte.
    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(u8::from(value));
    }

    /// Writes a signed byte.
    pub fn write_byte(&mut self, value: i8) {
        self.bytes.push(value as u8 ^ 0x80);
    }

    /// Writes a signed 16-bit integer.
    pub fn write_short(&mut self, value: i16) {
        self.write_unsigned_short(value as u16 ^ 0x8000);
    }

    /// Writes a signed 32-bit integer.
    pub fn write_int(&mut self, value: i32) {
        self.write_unsigned_int(value as u32 ^ 0x8000_0000);
    }

    /// Writes a signed 64-bit integer.
    pub fn write_long(&mut self, value: i64) {
        self.write_bytes(&(value as u64 ^ 0x8000_0000_0000_0000).to_be_bytes());
    }

    /// Writes an unsigned byte.
    pub fn write_unsigned_byte(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    pub fn write_unsigned_short(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    pub fn write_unsigned_int(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes the IEEE 754 bits of an `f32` (big-endian).
    ///
    /// The bytes do not sort numerically; see
    /// [`write_sorted_float`](Self::write_sorted_float).
    pub fn write_float(&mut self, value: f32) {
        self.write_unsigned_int(float_bits(value));
    }

    /// Writes the IEEE 754 bits of an `f64` (big-endian).
    pub fn write_double(&mut self, value: f64) {
        self.write_bytes(&double_bits(value).to_be_bytes());
    }

    /// Writes an `f32` so that encodings sort in numeric order.
    ///
    /// Negative values have all bits inverted, others only the sign bit.
    pub fn write_sorted_float(&mut self, value: f32) {
        let bits = float_bits(value);
        let sortable = if bits & 0x8000_0000 == 0 {
            bits ^ 0x8000_0000
        } else {
            !bits
        };
        self.write_unsigned_int(sortable);
    }

    /// Writes an `f64` so that encodings sort in numeric order.
    pub fn write_sorted_double(&mut self, value: f64) {
        let bits = double_bits(value);
        let sortable = if bits & 0x8000_0000_0000_0000 == 0 {
            bits ^ 0x8000_0000_0000_0000
        } else {
            !bits
        };
        self.write_bytes(&sortable.to_be_bytes());
    }

    /// Writes a packed `i32` (1 to 5 bytes).
    pub fn write_packed_int(&mut self, value: i32) -> TupleResult<()> {
        self.write_packed(packed::write_int_len(value), |buf, offset| {
            packed::write_int(buf, offset, value)
        })
    }

    /// Writes a packed `i64` (1 to 9 bytes).
    pub fn write_packed_long(&mut self, value: i64) -> TupleResult<()> {
        self.write_packed(packed::write_long_len(value), |buf, offset| {
            packed::write_long(buf, offset, value)
        })
    }

    /// Writes a sorted packed `i32` (1 to 5 bytes).
    pub fn write_sorted_packed_int(&mut self, value: i32) -> TupleResult<()> {
        self.write_packed(packed::write_sorted_int_len(value), |buf, offset| {
            packed::write_sorted_int(buf, offset, value)
        })
    }

    /// Writes a sorted packed `i64` (1 to 9 bytes).
    pub fn write_sorted_packed_long(&mut self, value: i64) -> TupleResult<()> {
        self.write_packed(packed::write_sorted_long_len(value), |buf, offset| {
            packed::write_sorted_long(buf, offset, value)
        })
    }

    /// Reserves `len` bytes and runs `write` over them. On error the
    /// reservation is dropped and the output is left as it was.
    ///
    /// Callers pass the exact encoded length, so the packed writers never
    /// fail in practice.
    fn write_packed<F>(&mut self, len: usize, write: F) -> TupleResult<()>
    where
        F: FnOnce(&mut [u8], usize) -> PackedResult<usize>,
    {
        let offset = self.bytes.len();
        self.bytes.resize(offset + len, 0);
        if let Err(err) = write(&mut self.bytes, offset) {
            self.bytes.truncate(offset);
            return Err(err.into());
        }
        Ok(())
    }
}

/// IEEE 754 bits with every NaN collapsed to the canonical quiet NaN.
fn float_bits(value: f32) -> u32 {
    if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn double_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output() {
        let output = TupleOutput::new();
        assert!(output.is_empty());
        assert!(output.finish().is_empty());
    }

    #[test]
    fn write_bool_bytes() {
        let mut output = TupleOutput::new();
        output.write_bool(true);
        output.write_bool(false);
        assert_eq!(output.finish(), vec![1, 0]);
    }

    #[test]
    fn signed_fixed_width_flips_sign_bit() {
        let mut output = TupleOutput::new();
        output.write_byte(-1);
        output.write_short(0);
        output.write_int(1);
        output.write_long(i64::MIN);
        assert_eq!(
            output.finish(),
            vec![
                0x7F, // byte -1
                0x80, 0x00, // short 0
                0x80, 0x00, 0x00, 0x01, // int 1
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // long min
            ]
        );
    }

    #[test]
    fn unsigned_is_plain_big_endian() {
        let mut output = TupleOutput::new();
        output.write_unsigned_byte(0xAB);
        output.write_unsigned_short(0x1234);
        output.write_unsigned_int(0xDEAD_BEEF);
        assert_eq!(
            output.finish(),
            vec![0xAB, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF]
        );
    }

    #[test]
    fn float_bit_layouts() {
        let mut output = TupleOutput::new();
        output.write_float(1.0);
        output.write_sorted_float(1.0);
        output.write_sorted_float(-1.0);
        assert_eq!(
            output.finish(),
            vec![
                0x3F, 0x80, 0x00, 0x00, // 1.0
                0xBF, 0x80, 0x00, 0x00, // sorted 1.0
                0x40, 0x7F, 0xFF, 0xFF, // sorted -1.0
            ]
        );
    }

    #[test]
    fn packed_fields_append() {
        let mut output = TupleOutput::new();
        output.write_packed_int(120).unwrap();
        output.write_sorted_packed_int(0).unwrap();
        output.write_packed_long(-1).unwrap();
        output.write_sorted_packed_long(121).unwrap();
        assert_eq!(output.finish(), vec![0x78, 0x01, 0x7F, 0xFF, 0xF8, 0x00]);
    }

    #[test]
    fn nan_payloads_are_canonical() {
        let payload = f32::from_bits(0x7FC0_0001);
        let negative = f32::from_bits(0xFFC0_0000);
        assert!(payload.is_nan() && negative.is_nan());

        let mut canonical = TupleOutput::new();
        canonical.write_float(f32::NAN);
        canonical.write_sorted_float(f32::NAN);
        canonical.write_double(f64::NAN);
        canonical.write_sorted_double(f64::NAN);
        let canonical = canonical.finish();

        for (float, double) in [
            (payload, f64::from_bits(0x7FF8_0000_0000_0001)),
            (negative, -f64::NAN),
        ] {
            let mut output = TupleOutput::new();
            output.write_float(float);
            output.write_sorted_float(float);
            output.write_double(double);
            output.write_sorted_double(double);
            assert_eq!(output.finish(), canonical);
        }
    }

    #[test]
    fn failed_packed_write_restores_output() {
        let mut output = TupleOutput::new();
        output.write_bytes(&[1, 2]);
        // Reserving fewer bytes than the encoding needs makes the write fail.
        let err = output
            .write_packed(1, |buf, offset| packed::write_int(buf, offset, 70_000))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::TupleError::Packed(packed::PackedError::BufferTooShort {
                offset: 2,
                needed: 4,
                available: 1
            })
        ));
        assert_eq!(output.as_bytes(), &[1, 2]);

        output.write_packed_int(70_000).unwrap();
        assert_eq!(output.len(), 2 + 4);
    }

    #[test]
    fn into_entry_and_clear() {
        let mut output = TupleOutput::with_capacity(8);
        output.write_int(7);
        assert_eq!(output.len(), 4);
        output.clear();
        output.write_bytes(&[9, 9]);
        assert_eq!(output.as_bytes(), &[9, 9]);
        assert_eq!(output.into_entry().as_bytes(), &[9, 9]);
    }
}
