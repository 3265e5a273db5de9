/// Implementation of `varint decode`.
///
/// Decodes varints back to back from the start of the input. Each line
/// shows the offset the varint started at, its value and its length.
///
/// ```text
/// $ varint decode "ac02 00 808001"
/// @0  300    (2 bytes)
/// @2  0      (1 byte)
/// @3  16384  (3 bytes)
/// ```
///
/// A truncated tail or an invalid run ends the walk. Whatever decoded
/// before it is still printed, then the error is reported with its offset.
use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::{debug, info};
use varint_wire::{DecodeOptions, VarintError, decode_i64_with, decode_u64_with};

use crate::DecodeArgs;
use crate::input::{Value, byte_count, parse_hex};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Decoded {
    offset: usize,
    value: Value,
    len: usize,
}

/// Result of walking a byte string. `failure` holds the offset and error
/// of the varint that stopped the walk, if any.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Walk {
    decoded: Vec<Decoded>,
    failure: Option<(usize, VarintError)>,
}

/// Run the `varint decode` command.
///
/// # Errors
///
/// Returns an error on malformed hex, or when the walk hits an incomplete
/// or invalid varint.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let options = if args.strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    };

    let walk = walk(&bytes, args.signed, &options);
    info!(
        input_len = bytes.len(),
        varints = walk.decoded.len(),
        "decode finished"
    );

    if args.json {
        println!("{}", serde_json::to_string(&walk.decoded)?);
    } else {
        let value_width = walk
            .decoded
            .iter()
            .map(|d| d.value.to_string().len())
            .max()
            .unwrap_or(0);
        for d in &walk.decoded {
            println!(
                "@{}  {:<value_width$}  ({})",
                d.offset,
                d.value,
                byte_count(d.len)
            );
        }
    }

    match walk.failure {
        None => Ok(()),
        Some((offset, e)) => Err(anyhow!(e).context(format!("at offset {offset}"))),
    }
}

/// Decode consecutive varints. An empty input still attempts one decode so
/// it reports `Incomplete` rather than an empty success.
pub(crate) fn walk(bytes: &[u8], signed: bool, options: &DecodeOptions) -> Walk {
    let mut decoded = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() || decoded.is_empty() {
        let rest = &bytes[offset..];
        let result = if signed {
            decode_i64_with(rest, options).map(|(v, n)| (Value::Signed(v), n))
        } else {
            decode_u64_with(rest, options).map(|(v, n)| (Value::Unsigned(v), n))
        };

        match result {
            Ok((value, len)) => {
                debug!(offset, %value, len, "decoded varint");
                decoded.push(Decoded { offset, value, len });
                offset += len;
            }
            Err(e) => {
                debug!(offset, error = %e, "decode stopped");
                return Walk {
                    decoded,
                    failure: Some((offset, e)),
                };
            }
        }
    }

    Walk {
        decoded,
        failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(walk: &Walk) -> Vec<Value> {
        walk.decoded.iter().map(|d| d.value).collect()
    }

    #[test]
    fn walks_concatenated_varints() {
        let bytes = [0xAC, 0x02, 0x00, 0x80, 0x80, 0x01];
        let walk = walk(&bytes, false, &DecodeOptions::default());
        assert_eq!(
            values(&walk),
            vec![Value::Unsigned(300), Value::Unsigned(0), Value::Unsigned(16384)]
        );
        assert_eq!(walk.decoded[2].offset, 3);
        assert!(walk.failure.is_none());
    }

    #[test]
    fn signed_walk() {
        let walk = walk(&[0x01, 0x02, 0x03], true, &DecodeOptions::default());
        assert_eq!(
            values(&walk),
            vec![Value::Signed(-1), Value::Signed(1), Value::Signed(-2)]
        );
    }

    #[test]
    fn empty_input_is_incomplete() {
        let walk = walk(&[], false, &DecodeOptions::default());
        assert!(walk.decoded.is_empty());
        assert_eq!(walk.failure, Some((0, VarintError::Incomplete { available: 0 })));
    }

    #[test]
    fn truncated_tail_keeps_earlier_values() {
        let walk = walk(&[0x05, 0x80], false, &DecodeOptions::default());
        assert_eq!(values(&walk), vec![Value::Unsigned(5)]);
        assert_eq!(walk.failure, Some((1, VarintError::Incomplete { available: 1 })));
    }

    #[test]
    fn invalid_run_reports_offset() {
        let mut bytes = vec![0x01];
        bytes.extend_from_slice(&[0xFF; 10]);
        let walk = walk(&bytes, false, &DecodeOptions::default());
        assert_eq!(walk.failure, Some((1, VarintError::Invalid)));
    }

    #[test]
    fn strict_walk_rejects_overflow() {
        let mut bytes = vec![0x80; 9];
        bytes.push(0x7F);
        let lenient = walk(&bytes, false, &DecodeOptions::default());
        assert!(lenient.failure.is_none());
        let strict = walk(&bytes, false, &DecodeOptions::strict());
        assert_eq!(strict.failure, Some((0, VarintError::Overflow { byte: 0x7F })));
    }
}
