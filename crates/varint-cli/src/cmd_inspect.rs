/// Implementation of `varint inspect`.
///
/// Prints the layout of the varint at the start of the input, one row per
/// byte, then the decoded value in both interpretations.
///
/// # Output format
///
/// ```text
/// Byte  Hex   More  Payload  Bits
/// ─────────────────────────────────
/// 0     0xAC  yes   0101100  0..=6
/// 1     0x02  no    0000010  7..=13
/// ─────────────────────────────────
/// 2 bytes: unsigned 300, signed (zigzag) 150
/// ```
///
/// For a truncated or invalid varint the rows scanned so far are still
/// shown, followed by the decode error.
use anyhow::{Result, anyhow};
use varint_wire::{MAX_VARINT_BYTES, decode_u64, zigzag_decode};

use crate::InspectArgs;
use crate::input::{byte_count, parse_hex};

const RULE: &str = "─────────────────────────────────";

/// Run the `varint inspect` command.
///
/// # Errors
///
/// Returns an error on malformed hex or if the bytes do not start with a
/// complete, valid varint.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;

    println!("Byte  Hex   More  Payload  Bits");
    println!("{RULE}");
    for row in layout(&bytes) {
        println!("{row}");
    }
    println!("{RULE}");

    match decode_u64(&bytes) {
        Ok((value, len)) => {
            println!(
                "{}: unsigned {value}, signed (zigzag) {}",
                byte_count(len),
                zigzag_decode(value)
            );
            Ok(())
        }
        Err(e) => Err(anyhow!(e)),
    }
}

/// One formatted row per byte the decoder would examine: up to and
/// including the terminal byte, capped at [`MAX_VARINT_BYTES`].
fn layout(bytes: &[u8]) -> Vec<String> {
    let mut rows = Vec::new();
    for (i, &byte) in bytes.iter().take(MAX_VARINT_BYTES).enumerate() {
        let more = byte & 0x80 != 0;
        let low = 7 * i;
        rows.push(format!(
            "{i:<4}  0x{byte:02X}  {:<4}  {:07b}  {low}..={}",
            if more { "yes" } else { "no" },
            byte & 0x7F,
            low + 6
        ));
        if !more {
            break;
        }
    }
    rows
}
