#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod varint;
pub mod zigzag;

pub use config::{DecodeOptions, OverflowPolicy};
pub use error::VarintError;
pub use varint::{
    MAX_VARINT_BYTES, decode_i64, decode_i64_with, decode_u64, decode_u64_with, encode_i64,
    encode_u64, encoded_len,
};
pub use zigzag::{zigzag_decode, zigzag_encode};
