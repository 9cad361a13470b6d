//! Primitive codec: fixed-width unsigned big-endian integers and
//! bounds-checked byte extraction
//!
//! Every multi-byte field of this protocol is unsigned big-endian. Widths
//! are fixed per field (2 bytes for device ids, 1 byte for counts and
//! parameter values), so encoding checks that the value actually fits the
//! declared width instead of silently dropping high bits.

use super::{Error, Result};

/// Encode `value` as exactly `width` big-endian bytes.
///
/// Fails with [`Error::ValueTooWide`] when the minimal number of bytes
/// required for the magnitude exceeds `width`. A failure here means the
/// value cannot go on the wire at all; callers must not send anything.
pub fn encode_unsigned(value: u64, width: usize) -> Result<Vec<u8>> {
    if min_width(value) > width {
        return Err(Error::ValueTooWide { value, width });
    }
    let mut bytes = vec![0u8; width];
    for (n, byte) in bytes.iter_mut().rev().enumerate() {
        *byte = (value >> (n * 8)) as u8;
    }
    Ok(bytes)
}

/// Interpret `bytes` as a big-endian unsigned integer.
///
/// Byte 0 is the high-order byte. The protocol only ever reads 1- or
/// 2-byte fields; longer inputs fold the same way up to 8 bytes.
#[must_use]
pub fn decode_unsigned(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "field wider than u64");
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Return `bytes[start..end]`, rejecting malformed bounds.
///
/// Fails with [`Error::InvalidRange`] when `end < start` or `end` runs past
/// the buffer. Never reads out of bounds.
pub fn slice(bytes: &[u8], start: usize, end: usize) -> Result<&[u8]> {
    if end < start || end > bytes.len() {
        return Err(Error::InvalidRange {
            start,
            end,
            len: bytes.len(),
        });
    }
    Ok(&bytes[start..end])
}

/// Largest value in a count table, or 0 when the table is empty.
#[must_use]
pub fn max_of(values: &[u8]) -> u8 {
    values.iter().copied().max().unwrap_or(0)
}

/// Minimal number of bytes needed to represent `value` (at least 1).
fn min_width(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    usize::max(1, bits.div_ceil(8))
}
