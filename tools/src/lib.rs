//! Command-line tools for the packed integer encodings.
//!
//! The functions here back the `tuplepack-tools` binary and return
//! serializable reports:
//!
//! - [`encode_values`] encodes integers and reports each encoding.
//! - [`decode_stream`] splits a byte string into consecutive encodings.
//! - [`band_report`] lists the value ranges sharing each encoded length.
//!
//! # Design Principles
//!
//! - **Same code paths** - Every report goes through the public `packed` API,
//!   so the tools show exactly what the library writes and reads.
//! - **Machine-readable output** - Reports derive `Serialize` and print as
//!   JSON as well as text.

use anyhow::{bail, Context, Result};
use packed::{Format, Width};
use serde::Serialize;
use tracing::debug;

/// One encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedValue {
    pub value: i64,
    pub len: usize,
    pub hex: String,
}

/// Result of encoding a list of values back to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub format: &'static str,
    pub width: String,
    pub values: Vec<EncodedValue>,
    pub total_len: usize,
    /// All encodings concatenated.
    pub hex: String,
}

/// One value found in a decoded byte string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedValue {
    pub offset: usize,
    pub len: usize,
    pub hex: String,
    pub value: i64,
}

/// Result of decoding a concatenation of encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub format: &'static str,
    pub width: String,
    pub values: Vec<DecodedValue>,
    pub total_len: usize,
}

/// One row of the band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandRow {
    pub lower: i64,
    pub upper: i64,
    pub len: usize,
}

/// Value bands of a format and width, in ascending value order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandReport {
    pub format: &'static str,
    pub width: String,
    pub bands: Vec<BandRow>,
}

/// Short lowercase name of a format, as accepted on the command line.
#[must_use]
pub const fn format_name(format: Format) -> &'static str {
    match format {
        Format::Packed => "packed",
        Format::Sorted => "sorted",
    }
}

/// Encodes `values` one after another.
///
/// Fails if a value does not fit in `width`.
pub fn encode_values(format: Format, width: Width, values: &[i64]) -> Result<EncodeReport> {
    let mut buf = Vec::new();
    let mut encoded = Vec::with_capacity(values.len());

    for &value in values {
        if value < width.min_value() || value > width.max_value() {
            bail!("value {value} does not fit in {width}");
        }
        let start = buf.len();
        let len = packed::write_len(format, value);
        buf.resize(start + len, 0);
        let end = packed::write(format, &mut buf, start, value)
            .with_context(|| format!("encode {value}"))?;
        debug!(value, len, "encoded value");
        encoded.push(EncodedValue {
            value,
            len,
            hex: hex::encode(&buf[start..end]),
        });
    }

    Ok(EncodeReport {
        format: format_name(format),
        width: width.to_string(),
        values: encoded,
        total_len: buf.len(),
        hex: hex::encode(&buf),
    })
}

/// Decodes every encoding in `bytes`, which must hold whole encodings only.
pub fn decode_stream(format: Format, width: Width, bytes: &[u8]) -> Result<DecodeReport> {
    let mut values = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let len = packed::read_len(format, width, bytes, offset)
            .with_context(|| format!("read length at offset {offset}"))?;
        let value = packed::read(format, width, bytes, offset)
            .with_context(|| format!("decode value at offset {offset}"))?;
        debug!(offset, len, value, "decoded value");
        values.push(DecodedValue {
            offset,
            len,
            hex: hex::encode(&bytes[offset..offset + len]),
            value,
        });
        offset += len;
    }

    Ok(DecodeReport {
        format: format_name(format),
        width: width.to_string(),
        values,
        total_len: bytes.len(),
    })
}

/// Lists the value bands of a format and width.
#[must_use]
pub fn band_report(format: Format, width: Width) -> BandReport {
    let bands = packed::value_bands(format, width)
        .into_iter()
        .map(|band| BandRow {
            lower: band.lower,
            upper: band.upper,
            len: band.len,
        })
        .collect();
    BandReport {
        format: format_name(format),
        width: width.to_string(),
        bands,
    }
}

/// Parses hex input, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.split_whitespace().collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    hex::decode(digits).with_context(|| format!("invalid hex input {input:?}"))
}
