/// What the decoder does with the bits of a 10th byte that land above
/// bit 63.
///
/// A 10-byte varint has 70 payload bits but only 64 fit in a `u64`, so
/// the 10th byte may legally carry only `0x00` or `0x01` in its low seven
/// bits. Encoders never produce anything else.
///
/// ```text
/// ┌──────────┬───────────────────────────────────────────────────────┐
/// │ Policy   │ 10th byte payload > 0x01                              │
/// ├──────────┼───────────────────────────────────────────────────────┤
/// │ Truncate │ High bits silently dropped (wire-compatible default)  │
/// │ Reject   │ VarintError::Overflow                                 │
/// └──────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    #[default]
    Truncate,
    Reject,
}

/// Decoder settings. `DecodeOptions::default()` matches the behaviour of
/// [`decode_u64`](crate::decode_u64).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub overflow: OverflowPolicy,
}

impl DecodeOptions {
    /// Options that reject non-canonical 10th bytes.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Reject,
        }
    }
}
