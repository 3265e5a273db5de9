//! Shared parsing and value types for the subcommands.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

/// Parse a hex byte string. Accepts an optional `0x` prefix and ignores
/// whitespace anywhere, so `"ac 02"`, `"0xAC02"` and `"ac02"` are equal.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits).with_context(|| format!("invalid hex input {input:?}"))
}

/// A decoded or to-be-encoded integer in whichever signedness the command
/// was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
}

impl Value {
    /// Parse a decimal literal as `i64` when `signed`, `u64` otherwise.
    pub fn parse(literal: &str, signed: bool) -> Result<Self> {
        if signed {
            let v = literal
                .parse::<i64>()
                .with_context(|| format!("{literal:?} is not a valid i64"))?;
            Ok(Self::Signed(v))
        } else {
            let v = literal
                .parse::<u64>()
                .with_context(|| format!("{literal:?} is not a valid u64"))?;
            Ok(Self::Unsigned(v))
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => v.fmt(f),
            Self::Signed(v) => v.fmt(f),
        }
    }
}

/// `"1 byte"` / `"N bytes"`.
pub fn byte_count(n: usize) -> String {
    format!("{n} byte{}", if n == 1 { "" } else { "s" })
}
