use crate::config::{DecodeOptions, OverflowPolicy};
use crate::error::VarintError;
use crate::zigzag::{zigzag_decode, zigzag_encode};

/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_BYTES: usize = 10;

/// Number of bytes [`encode_u64`] writes for `value`.
#[must_use]
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    bits.div_ceil(7).max(1)
}

/// Encode a `u64` value as an unsigned varint into the provided buffer.
///
/// # Returns
///
/// The number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than [`encoded_len`] of `value`.
/// A 10-byte buffer is always sufficient for any `u64`.
///
/// # Wire format examples
///
/// | Value      | Encoded bytes            | Length |
/// |------------|--------------------------|--------|
/// | 0          | `[0x00]`                 | 1      |
/// | 127        | `[0x7F]`                 | 1      |
/// | 128        | `[0x80, 0x01]`           | 2      |
/// | 300        | `[0xAC, 0x02]`           | 2      |
/// | 16384      | `[0x80, 0x80, 0x01]`     | 3      |
/// | `u64::MAX` | `[0xFF; 9] ++ [0x01]`    | 10     |
pub fn encode_u64(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        // Take the lowest 7 bits
        #[allow(clippy::cast_possible_truncation)]
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        // A u64 runs dry after 10 groups, so this always ends by i == 10.
        if value == 0 {
            break;
        }
    }
    i
}

/// Encode an `i64` as a zigzag varint. Same contract as [`encode_u64`].
///
/// `-1` encodes as `[0x01]`, `1` as `[0x02]`.
///
/// # Panics
///
/// Panics if `buf` is too short for the encoding.
pub fn encode_i64(value: i64, buf: &mut [u8]) -> usize {
    encode_u64(zigzag_encode(value), buf)
}

/// Decode an unsigned varint from the start of `buf`.
///
/// Trailing bytes after the terminal byte are left alone.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`VarintError::Incomplete`] if `buf` ends before a terminal byte and
///   fewer than 10 bytes were available.
/// - [`VarintError::Invalid`] if the first 10 bytes all have the
///   continuation bit set.
pub fn decode_u64(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    decode_u64_with(buf, &DecodeOptions::default())
}

/// [`decode_u64`] with explicit [`DecodeOptions`].
///
/// # Errors
///
/// As [`decode_u64`], plus [`VarintError::Overflow`] under
/// [`OverflowPolicy::Reject`] when the 10th byte carries bits above bit 63.
pub fn decode_u64_with(buf: &[u8], options: &DecodeOptions) -> Result<(u64, usize), VarintError> {
    let mut result: u64 = 0;

    for (i, &byte) in buf.iter().take(MAX_VARINT_BYTES).enumerate() {
        let data = u64::from(byte & 0x7F);
        let last = byte & 0x80 == 0;

        if last
            && i == MAX_VARINT_BYTES - 1
            && data > 1
            && options.overflow == OverflowPolicy::Reject
        {
            return Err(VarintError::Overflow { byte });
        }

        // At i == 9 the shift is 63; anything above bit 63 falls off.
        result |= data << (7 * i);

        if last {
            return Ok((result, i + 1));
        }
    }

    if buf.len() >= MAX_VARINT_BYTES {
        Err(VarintError::Invalid)
    } else {
        Err(VarintError::Incomplete {
            available: buf.len(),
        })
    }
}

/// Decode a zigzag varint from the start of `buf`.
///
/// # Errors
///
/// Same as [`decode_u64`]; errors pass through unchanged.
pub fn decode_i64(buf: &[u8]) -> Result<(i64, usize), VarintError> {
    decode_i64_with(buf, &DecodeOptions::default())
}

/// [`decode_i64`] with explicit [`DecodeOptions`].
///
/// # Errors
///
/// Same as [`decode_u64_with`].
pub fn decode_i64_with(buf: &[u8], options: &DecodeOptions) -> Result<(i64, usize), VarintError> {
    let (raw, consumed) = decode_u64_with(buf, options)?;
    Ok((zigzag_decode(raw), consumed))
}
