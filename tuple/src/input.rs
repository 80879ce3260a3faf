//! Bounded tuple reader.

use crate::error::{TupleError, TupleResult};

/// Reads primitive fields written by [`TupleOutput`](crate::TupleOutput).
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct TupleInput<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TupleInput<'a> {
    /// Creates a new `TupleInput` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current read offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left to read.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.available() == 0
    }

    /// Skips `len` bytes.
    pub fn skip(&mut self, len: usize) -> TupleResult<()> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> TupleResult<&'a [u8]> {
        self.ensure(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a boolean; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> TupleResult<bool> {
        Ok(self.read_unsigned_byte()? != 0)
    }

    /// Reads a signed byte.
    pub fn read_byte(&mut self) -> TupleResult<i8> {
        Ok((self.read_unsigned_byte()? ^ 0x80) as i8)
    }

    /// Reads a signed 16-bit integer.
    pub fn read_short(&mut self) -> TupleResult<i16> {
        Ok((self.read_unsigned_short()? ^ 0x8000) as i16)
    }

    /// Reads a signed 32-bit integer.
    pub fn read_int(&mut self) -> TupleResult<i32> {
        Ok((self.read_unsigned_int()? ^ 0x8000_0000) as i32)
    }

    /// Reads a signed 64-bit integer.
    pub fn read_long(&mut self) -> TupleResult<i64> {
        let bits = u64::from_be_bytes(self.read_array::<8>()?);
        Ok((bits ^ 0x8000_0000_0000_0000) as i64)
    }

    /// Reads an unsigned byte.
    pub fn read_unsigned_byte(&mut self) -> TupleResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    pub fn read_unsigned_short(&mut self) -> TupleResult<u16> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    pub fn read_unsigned_int(&mut self) -> TupleResult<u32> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads an `f32` from its IEEE 754 bits.
    pub fn read_float(&mut self) -> TupleResult<f32> {
        Ok(f32::from_bits(self.read_unsigned_int()?))
    }

    /// Reads an `f64` from its IEEE 754 bits.
    pub fn read_double(&mut self) -> TupleResult<f64> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array::<8>()?)))
    }

    /// Reads an `f32` written with `write_sorted_float`.
    pub fn read_sorted_float(&mut self) -> TupleResult<f32> {
        let sortable = self.read_unsigned_int()?;
        let bits = if sortable & 0x8000_0000 == 0 {
            !sortable
        } else {
            sortable ^ 0x8000_0000
        };
        Ok(f32::from_bits(bits))
    }

    /// Reads an `f64` written with `write_sorted_double`.
    pub fn read_sorted_double(&mut self) -> TupleResult<f64> {
        let sortable = u64::from_be_bytes(self.read_array::<8>()?);
        let bits = if sortable & 0x8000_0000_0000_0000 == 0 {
            !sortable
        } else {
            sortable ^ 0x8000_0000_0000_0000
        };
        Ok(f64::from_bits(bits))
    }

    /// Returns the length of the packed `i32` at the read offset.
    pub fn packed_int_len(&self) -> TupleResult<usize> {
        packed::read_int_len(self.data, self.pos).map_err(TupleError::from)
    }

    /// Returns the length of the packed `i64` at the read offset.
    pub fn packed_long_len(&self) -> TupleResult<usize> {
        packed::read_long_len(self.data, self.pos).map_err(TupleError::from)
    }

    /// Returns the length of the sorted packed `i32` at the read offset.
    pub fn sorted_packed_int_len(&self) -> TupleResult<usize> {
        packed::read_sorted_int_len(self.data, self.pos).map_err(TupleError::from)
    }

    /// Returns the length of the sorted packed `i64` at the read offset.
    pub fn sorted_packed_long_len(&self) -> TupleResult<usize> {
        packed::read_sorted_long_len(self.data, self.pos).map_err(TupleError::from)
    }

    /// Reads a packed `i32`.
    pub fn read_packed_int(&mut self) -> TupleResult<i32> {
        let len = self.packed_int_len()?;
        let value = packed::read_int(self.data, self.pos)?;
        self.pos += len;
        Ok(value)
    }

    /// Reads a packed `i64`.
    pub fn read_packed_long(&mut self) -> TupleResult<i64> {
        let len = self.packed_long_len()?;
        let value = packed::read_long(self.data, self.pos)?;
        self.pos += len;
        Ok(value)
    }

    /// Reads a sorted packed `i32`.
    pub fn read_sorted_packed_int(&mut self) -> TupleResult<i32> {
        let len = self.sorted_packed_int_len()?;
        let value = packed::read_sorted_int(self.data, self.pos)?;
        self.pos += len;
        Ok(value)
    }

    /// Reads a sorted packed `i64`.
    pub fn read_sorted_packed_long(&mut self) -> TupleResult<i64> {
        let len = self.sorted_packed_long_len()?;
        let value = packed::read_sorted_long(self.data, self.pos)?;
        self.pos += len;
        Ok(value)
    }

    fn ensure(&self, len: usize) -> TupleResult<()> {
        let available = self.available();
        if len > available {
            return Err(TupleError::UnexpectedEnd {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> TupleResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
