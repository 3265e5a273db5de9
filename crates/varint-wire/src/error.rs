/// Decode failures. Encoding never fails.
///
/// ```text
///   VarintError
///   ├── Incomplete   ← buffer ended before a terminal byte; retry with more data
///   ├── Invalid      ← 10 continuation bytes in a row; not a varint at all
///   └── Overflow     ← strict mode only: 10th byte carries bits above bit 63
/// ```
///
/// `Incomplete` is the only recoverable variant. A caller reassembling
/// varints from a socket should keep buffering on `Incomplete` and treat
/// everything else as a hard parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
    /// Input ended before a byte with the continuation bit clear.
    #[error("incomplete varint: {available} byte(s) available, terminal byte not found")]
    Incomplete { available: usize },

    /// Ten bytes were consumed and all of them had the continuation bit set.
    #[error("invalid varint: exceeded 10-byte limit")]
    Invalid,

    /// The 10th byte holds payload bits that do not fit in 64 bits.
    #[error("varint overflow: 10th byte {byte:#04X} exceeds 64-bit range")]
    Overflow { byte: u8 },
}

impl VarintError {
    /// `true` when more input may turn this into a successful decode.
    #[must_use]
    pub fn is_incomplete(self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
