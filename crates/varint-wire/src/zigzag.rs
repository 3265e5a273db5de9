//! Zigzag mapping between `i64` and `u64`.
//!
//! ```text
//!    0 → 0     -1 → 1     1 → 2     -2 → 3     2 → 4  ...
//! ```
//!
//! Small magnitudes of either sign map to small unsigned values, so they
//! stay short once varint-encoded.

/// Map a signed value onto the unsigned zigzag line.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode(value: i64) -> u64 {
    // `>> 63` is arithmetic on i64: all ones for negatives, zero otherwise.
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn zigzag_decode(value: u64) -> i64 {
    let half = (value >> 1) as i64;
    if value & 1 == 0 { half } else { !half }
}
