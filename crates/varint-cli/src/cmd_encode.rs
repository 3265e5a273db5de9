/// Implementation of `varint encode`.
///
/// # Output format
///
/// ```text
/// 300    ac02    (2 bytes)
/// -1     01      (1 byte)      ← with --signed
/// ```
///
/// With `--json`:
///
/// ```json
/// [{"value":300,"hex":"ac02","len":2}]
/// ```
use anyhow::Result;
use serde::Serialize;
use tracing::debug;
use varint_wire::{MAX_VARINT_BYTES, encode_i64, encode_u64};

use crate::EncodeArgs;
use crate::input::{Value, byte_count};

#[derive(Debug, Serialize)]
struct Encoded {
    value: Value,
    hex: String,
    len: usize,
}

/// Run the `varint encode` command.
///
/// # Errors
///
/// Returns an error if any value fails to parse in the requested
/// signedness. Nothing is printed in that case.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let encoded = args
        .values
        .iter()
        .map(|literal| Value::parse(literal, args.signed).map(encode))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        println!("{}", serde_json::to_string(&encoded)?);
        return Ok(());
    }

    let value_width = encoded.iter().map(|e| e.value.to_string().len()).max().unwrap_or(0);
    let hex_width = encoded.iter().map(|e| e.hex.len()).max().unwrap_or(0);
    for e in &encoded {
        println!(
            "{:<value_width$}  {:<hex_width$}  ({})",
            e.value,
            e.hex,
            byte_count(e.len)
        );
    }
    Ok(())
}

fn encode(value: Value) -> Encoded {
    let mut buf = [0u8; MAX_VARINT_BYTES];
    let len = match value {
        Value::Unsigned(v) => encode_u64(v, &mut buf),
        Value::Signed(v) => encode_i64(v, &mut buf),
    };
    debug!(%value, len, "encoded");
    Encoded {
        value,
        hex: hex::encode(&buf[..len]),
        len,
    }
}
