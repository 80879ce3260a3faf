//! Width- and format-generic encode and decode paths.

use crate::band::{payload_len, Control, Format, Width, BIAS};
use crate::error::{PackedError, PackedResult};

/// A value split into its control tag and raw payload bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Split {
    pub(crate) control: Control,
    /// Only the low `control.payload_len()` bytes are emitted.
    pub(crate) payload: u64,
}

pub(crate) fn split(format: Format, value: i64) -> Split {
    let (inline_lower, inline_upper) = format.inline_range();
    if value > inline_upper {
        let offset = match format {
            Format::Packed => value - BIAS,
            Format::Sorted => value - BIAS - 2,
        } as u64;
        return Split {
            control: Control::Positive(payload_len(offset)),
            payload: offset,
        };
    }
    if value < inline_lower {
        return match format {
            Format::Packed => {
                let offset = (-i128::from(value) - i128::from(BIAS)) as u64;
                Split {
                    control: Control::Negative(payload_len(offset)),
                    payload: offset,
                }
            }
            Format::Sorted => {
                // Two's complement of the adjusted value, sign-extended bytes dropped.
                let adjusted = value + BIAS;
                Split {
                    control: Control::Negative(payload_len(!adjusted as u64)),
                    payload: adjusted as u64,
                }
            }
        };
    }
    Split {
        control: Control::Inline(value as i8),
        payload: 0,
    }
}

pub(crate) fn encoded_len(format: Format, value: i64) -> usize {
    split(format, value).control.encoded_len()
}

pub(crate) fn write(
    format: Format,
    value: i64,
    buf: &mut [u8],
    offset: usize,
) -> PackedResult<usize> {
    let split = split(format, value);
    let end = checked_end(buf.len(), offset, split.control.encoded_len())?;
    // `split` only builds tags drawn from the band table, which all have a byte.
    let Some(control) = format.control_byte(split.control) else {
        return Err(PackedError::ValueOutOfRange {
            value: i128::from(value),
            width: Width::Long,
        });
    };
    let n = split.control.payload_len();
    buf[offset] = control;
    let payload = &mut buf[offset + 1..end];
    match format {
        Format::Packed => payload.copy_from_slice(&split.payload.to_le_bytes()[..n]),
        Format::Sorted => payload.copy_from_slice(&split.payload.to_be_bytes()[8 - n..]),
    }
    Ok(end)
}

pub(crate) fn control_at(
    format: Format,
    width: Width,
    buf: &[u8],
    offset: usize,
) -> PackedResult<Control> {
    let byte = *buf
        .get(offset)
        .ok_or_else(|| PackedError::short(offset, 1, buf.len()))?;
    let control = format.control(byte);
    if control.payload_len() > width.max_payload() {
        return Err(PackedError::InvalidControl { byte, width });
    }
    Ok(control)
}

pub(crate) fn read(format: Format, width: Width, buf: &[u8], offset: usize) -> PackedResult<i64> {
    let control = control_at(format, width, buf, offset)?;
    let end = checked_end(buf.len(), offset, control.encoded_len())?;
    let payload = &buf[offset + 1..end];
    let bias = i128::from(BIAS);
    let value = match (format, control) {
        (_, Control::Inline(value)) => i128::from(value),
        (Format::Packed, Control::Positive(_)) => i128::from(little_endian(payload)) + bias,
        (Format::Packed, Control::Negative(_)) => -i128::from(little_endian(payload)) - bias,
        (Format::Sorted, Control::Positive(_)) => i128::from(big_endian(payload)) + bias + 2,
        (Format::Sorted, Control::Negative(n)) => {
            i128::from(big_endian(payload)) - (1i128 << (8 * u32::from(n))) - bias
        }
    };
    width.narrow(value)
}

fn checked_end(len: usize, offset: usize, needed: usize) -> PackedResult<usize> {
    match offset.checked_add(needed) {
        Some(end) if end <= len => Ok(end),
        _ => Err(PackedError::short(offset, needed, len)),
    }
}

fn little_endian(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
}

fn big_endian(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_inline() {
        assert_eq!(split(Format::Packed, 119).control, Control::Inline(119));
        assert_eq!(split(Format::Packed, -119).control, Control::Inline(-119));
        assert_eq!(split(Format::Sorted, 120).control, Control::Inline(120));
        assert_eq!(split(Format::Sorted, -119).control, Control::Inline(-119));
    }

    #[test]
    fn split_packed_offsets() {
        let pos = split(Format::Packed, 120);
        assert_eq!(pos.control, Control::Positive(1));
        assert_eq!(pos.payload, 1);

        let neg = split(Format::Packed, -375);
        assert_eq!(neg.control, Control::Negative(2));
        assert_eq!(neg.payload, 256);
    }

    #[test]
    fn split_packed_min_long_does_not_overflow() {
        let split = split(Format::Packed, i64::MIN);
        assert_eq!(split.control, Control::Negative(8));
        assert_eq!(split.payload, (1u64 << 63) - 119);
    }

    #[test]
    fn split_sorted_offsets() {
        let pos = split(Format::Sorted, 121);
        assert_eq!(pos.control, Control::Positive(1));
        assert_eq!(pos.payload, 0);

        let neg = split(Format::Sorted, -120);
        assert_eq!(neg.control, Control::Negative(1));
        assert_eq!(neg.payload as u8, 0xFF);

        let neg = split(Format::Sorted, -376);
        assert_eq!(neg.control, Control::Negative(2));
        assert_eq!(neg.payload as u16, 0xFEFF);
    }

    #[test]
    fn endian_helpers() {
        assert_eq!(little_endian(&[0x01, 0x02]), 0x0201);
        assert_eq!(big_endian(&[0x01, 0x02]), 0x0102);
        assert_eq!(big_endian(&[0xFF; 8]), u64::MAX);
        assert_eq!(little_endian(&[]), 0);
    }

    #[test]
    fn checked_end_overflow() {
        assert!(checked_end(4, usize::MAX, 2).is_err());
        assert_eq!(checked_end(4, 2, 2).unwrap(), 4);
        assert!(checked_end(4, 3, 2).is_err());
    }
}
