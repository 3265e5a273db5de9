//! Golden vector generator for the varint conformance tests.
//!
//! Rewrites `tests/golden/unsigned.txt` and `tests/golden/signed.txt` from
//! the current encoder. Run it only after a deliberate wire-format change;
//! the committed files are what the conformance tests hold the codec to.
//!
//! ```bash
//! cargo run --bin generate_golden -p varint-tests
//! ```

use std::fmt::Write as _;
use std::fs;

use varint_tests::{SIGNED_VALUES, UNSIGNED_VALUES, golden_path};
use varint_wire::{MAX_VARINT_BYTES, encode_i64, encode_u64};

const REGENERATE: &str = "# Regenerate with: cargo run -p varint-tests --bin generate_golden\n";

fn main() -> std::io::Result<()> {
    let mut unsigned = String::from("# Unsigned varint vectors: <decimal u64> <hex bytes>\n");
    unsigned.push_str(REGENERATE);
    for &value in UNSIGNED_VALUES {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode_u64(value, &mut buf);
        let _ = writeln!(unsigned, "{value} {}", hex::encode(&buf[..len]));
    }

    let mut signed = String::from("# Zigzag varint vectors: <decimal i64> <hex bytes>\n");
    signed.push_str(REGENERATE);
    for &value in SIGNED_VALUES {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode_i64(value, &mut buf);
        let _ = writeln!(signed, "{value} {}", hex::encode(&buf[..len]));
    }

    for (name, text) in [("unsigned.txt", unsigned), ("signed.txt", signed)] {
        let path = golden_path(name);
        fs::write(&path, text)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
