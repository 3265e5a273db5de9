//! Shared helpers for the varint integration tests and benches.
//!
//! Golden vectors are plain text, one `<decimal> <hex>` pair per line,
//! `#` starts a comment:
//!
//! ```text
//! tests/golden/unsigned.txt   u64 values, direct encoding
//! tests/golden/signed.txt     i64 values, zigzag encoding
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Absolute path of a file under `tests/golden/`.
#[must_use]
pub fn golden_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name)
}

/// Parse golden vector text into `(value, bytes)` pairs.
///
/// # Panics
///
/// Panics on a malformed line; golden files are committed test fixtures.
#[must_use]
pub fn parse_vectors<T>(text: &str) -> Vec<(T, Vec<u8>)>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (value, bytes) = line
                .split_once(' ')
                .unwrap_or_else(|| panic!("malformed golden line {line:?}"));
            let value = value
                .parse()
                .unwrap_or_else(|e| panic!("bad value in {line:?}: {e:?}"));
            let bytes = hex::decode(bytes.trim())
                .unwrap_or_else(|e| panic!("bad hex in {line:?}: {e}"));
            (value, bytes)
        })
        .collect()
}

/// Read and parse a golden vector file.
///
/// # Panics
///
/// Panics if the file is missing or malformed.
#[must_use]
pub fn load_vectors<T>(name: &str) -> Vec<(T, Vec<u8>)>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    let path = golden_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()));
    parse_vectors(&text)
}

/// Values the vector files cover, in file order. Used by the generator.
pub const UNSIGNED_VALUES: &[u64] = &[
    0,
    1,
    127,
    128,
    255,
    300,
    16_383,
    16_384,
    2_097_151,
    2_097_152,
    1 << 28,
    u32::MAX as u64,
    1 << 35,
    1 << 42,
    1 << 49,
    1 << 56,
    i64::MAX as u64,
    1 << 63,
    u64::MAX,
];

/// Signed counterpart of [`UNSIGNED_VALUES`].
pub const SIGNED_VALUES: &[i64] = &[
    0,
    -1,
    1,
    -2,
    2,
    -64,
    63,
    64,
    -65,
    150,
    -150,
    i32::MAX as i64,
    i32::MIN as i64,
    i64::MAX,
    i64::MIN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# header\n\n300 ac02\n  0 00  \n";
        let vectors: Vec<(u64, Vec<u8>)> = parse_vectors(text);
        assert_eq!(vectors, vec![(300, vec![0xAC, 0x02]), (0, vec![0x00])]);
    }

    #[test]
    fn parse_signed() {
        let vectors: Vec<(i64, Vec<u8>)> = parse_vectors("-1 01");
        assert_eq!(vectors, vec![(-1, vec![0x01])]);
    }
}
