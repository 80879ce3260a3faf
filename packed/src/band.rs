//! Band table and control byte layout shared by every encoding.
//!
//! Both formats split a value into a control byte and a payload. The payload
//! length is picked from [`PAYLOAD_BANDS`], which is the only place band
//! boundaries are written down; length prediction, encoding and the value
//! band report all go through it.

use std::fmt;

use crate::error::{PackedError, PackedResult};

/// Bias applied to values outside the single-byte range.
pub const BIAS: i64 = 119;

/// Maximum encoded length of an `i32`.
pub const MAX_INT_LEN: usize = 5;

/// Maximum encoded length of an `i64`.
pub const MAX_LONG_LEN: usize = 9;

/// Integer width an encoding is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 32-bit signed, at most 4 payload bytes.
    Int,
    /// 64-bit signed, at most 8 payload bytes.
    Long,
}

impl Width {
    /// Maximum number of payload bytes after the control byte.
    #[must_use]
    pub const fn max_payload(self) -> usize {
        match self {
            Self::Int => 4,
            Self::Long => 8,
        }
    }

    /// Maximum encoded length including the control byte.
    #[must_use]
    pub const fn max_len(self) -> usize {
        self.max_payload() + 1
    }

    /// Smallest representable value.
    #[must_use]
    pub const fn min_value(self) -> i64 {
        match self {
            Self::Int => i32::MIN as i64,
            Self::Long => i64::MIN,
        }
    }

    /// Largest representable value.
    #[must_use]
    pub const fn max_value(self) -> i64 {
        match self {
            Self::Int => i32::MAX as i64,
            Self::Long => i64::MAX,
        }
    }

    pub(crate) fn narrow(self, value: i128) -> PackedResult<i64> {
        if value < i128::from(self.min_value()) || value > i128::from(self.max_value()) {
            return Err(PackedError::ValueOutOfRange { value, width: self });
        }
        Ok(value as i64)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "i32",
            Self::Long => "i64",
        };
        write!(f, "{name}")
    }
}

/// Byte layout of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Compact layout, payload least significant byte first.
    Packed,
    /// Order-preserving layout, payload most significant byte first.
    ///
    /// Encodings compare as unsigned byte strings in the same order as the
    /// values they hold.
    Sorted,
}

impl Format {
    /// Inclusive range of values stored in the control byte alone.
    #[must_use]
    pub const fn inline_range(self) -> (i64, i64) {
        match self {
            Self::Packed => (-BIAS, BIAS),
            Self::Sorted => (-BIAS, BIAS + 1),
        }
    }

    /// Decodes a control byte through the per-format lookup table.
    #[must_use]
    pub fn control(self, byte: u8) -> Control {
        match self {
            Self::Packed => PACKED_CONTROL[usize::from(byte)],
            Self::Sorted => SORTED_CONTROL[usize::from(byte)],
        }
    }

    /// Encodes a control tag as its control byte.
    ///
    /// Returns `None` for tags no control byte carries: payload lengths
    /// outside `1..=8` and inline values outside [`inline_range`](Self::inline_range).
    #[must_use]
    pub const fn control_byte(self, control: Control) -> Option<u8> {
        let (inline_lower, inline_upper) = self.inline_range();
        match (self, control) {
            (_, Control::Positive(n) | Control::Negative(n)) if n == 0 || n > 8 => None,
            (_, Control::Inline(value))
                if (value as i64) < inline_lower || (value as i64) > inline_upper =>
            {
                None
            }
            (Self::Packed, Control::Inline(value)) => Some(value as u8),
            (Self::Packed, Control::Positive(n)) => Some(BIAS as u8 + n),
            (Self::Packed, Control::Negative(n)) => Some((-(BIAS as i16) - n as i16) as u8),
            (Self::Sorted, Control::Inline(value)) => Some((value as i16 + 127) as u8),
            (Self::Sorted, Control::Positive(n)) => Some(0xF7 + n),
            (Self::Sorted, Control::Negative(n)) => Some(0x08 - n),
        }
    }
}

/// Sign and length class carried by a control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The value itself; no payload follows.
    Inline(i8),
    /// Value above the inline range, followed by `n` payload bytes.
    Positive(u8),
    /// Value below the inline range, followed by `n` payload bytes.
    Negative(u8),
}

impl Control {
    /// Number of payload bytes following the control byte.
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Inline(_) => 0,
            Self::Positive(n) | Self::Negative(n) => n as usize,
        }
    }

    /// Total encoded length including the control byte.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        1 + self.payload_len()
    }
}

/// A range of unsigned band offsets sharing one payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Band {
    /// Smallest offset in the band.
    pub lower: u64,
    /// Largest offset in the band.
    pub upper: u64,
    /// Payload bytes used by offsets in the band.
    pub payload_len: usize,
}

impl Band {
    const fn new(lower: u64, upper: u64, payload_len: usize) -> Self {
        Self {
            lower,
            upper,
            payload_len,
        }
    }
}

/// Offset bands in ascending order. Every format maps a value outside its
/// inline range to an offset and takes the first band that holds it.
pub const PAYLOAD_BANDS: [Band; 8] = [
    Band::new(0, 0xFF, 1),
    Band::new(0x100, 0xFFFF, 2),
    Band::new(0x1_0000, 0xFF_FFFF, 3),
    Band::new(0x100_0000, 0xFFFF_FFFF, 4),
    Band::new(0x1_0000_0000, 0xFF_FFFF_FFFF, 5),
    Band::new(0x100_0000_0000, 0xFFFF_FFFF_FFFF, 6),
    Band::new(0x1_0000_0000_0000, 0xFF_FFFF_FFFF_FFFF, 7),
    Band::new(0x100_0000_0000_0000, u64::MAX, 8),
];

/// Returns the payload length for a band offset.
pub(crate) fn payload_len(offset: u64) -> u8 {
    PAYLOAD_BANDS
        .iter()
        .find(|band| offset <= band.upper)
        .map_or(PAYLOAD_BANDS.len(), |band| band.payload_len) as u8
}

static PACKED_CONTROL: [Control; 256] = control_table(Format::Packed);
static SORTED_CONTROL: [Control; 256] = control_table(Format::Sorted);

const fn control_table(format: Format) -> [Control; 256] {
    let mut table = [Control::Inline(0); 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = match format {
            Format::Packed => packed_control(byte as u8),
            Format::Sorted => sorted_control(byte as u8),
        };
        byte += 1;
    }
    table
}

// 0x80 maps to Negative(9), which no width accepts.
const fn packed_control(byte: u8) -> Control {
    let signed = byte as i8;
    if signed > BIAS as i8 {
        Control::Positive((signed - BIAS as i8) as u8)
    } else if signed < -(BIAS as i8) {
        Control::Negative((-(BIAS as i8) - signed) as u8)
    } else {
        Control::Inline(signed)
    }
}

const fn sorted_control(byte: u8) -> Control {
    if byte < 0x08 {
        Control::Negative(0x08 - byte)
    } else if byte > 0xF7 {
        Control::Positive(byte - 0xF7)
    } else {
        Control::Inline((byte as i16 - 127) as i8)
    }
}

/// A contiguous range of values sharing one encoded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueBand {
    /// Smallest value in the band.
    pub lower: i64,
    /// Largest value in the band.
    pub upper: i64,
    /// Encoded length of every value in the band.
    pub len: usize,
}

/// Returns the value bands of a format and width in ascending value order.
///
/// The bands cover `width.min_value()..=width.max_value()` without gaps.
#[must_use]
pub fn value_bands(format: Format, width: Width) -> Vec<ValueBand> {
    let min = i128::from(width.min_value());
    let max = i128::from(width.max_value());
    let bias = i128::from(BIAS);

    let mut negative = Vec::new();
    let mut positive = Vec::new();
    for band in &PAYLOAD_BANDS[..width.max_payload()] {
        let len = band.payload_len + 1;
        let upper = i128::from(band.upper);
        let (neg_lower, neg_upper, pos_lower, pos_upper) = match format {
            Format::Packed => {
                // Offset zero is the inline maximum, never a payload.
                let lower = i128::from(band.lower.max(1));
                (-upper - bias, -lower - bias, lower + bias, upper + bias)
            }
            Format::Sorted => {
                let lower = i128::from(band.lower);
                (
                    -(upper + 1) - bias,
                    -(lower + 1) - bias,
                    lower + bias + 2,
                    upper + bias + 2,
                )
            }
        };
        if neg_upper >= min {
            negative.push(ValueBand {
                lower: neg_lower.max(min) as i64,
                upper: neg_upper as i64,
                len,
            });
        }
        if pos_lower <= max {
            positive.push(ValueBand {
                lower: pos_lower as i64,
                upper: pos_upper.min(max) as i64,
                len,
            });
        }
    }

    let (inline_lower, inline_upper) = format.inline_range();
    negative.reverse();
    negative.push(ValueBand {
        lower: inline_lower,
        upper: inline_upper,
        len: 1,
    });
    negative.extend(positive);
    negative
}
