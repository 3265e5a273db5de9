#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use varint_wire::{
    decode_i64, decode_u64, decode_u64_with, encode_i64, encode_u64, encoded_len, DecodeOptions,
};

#[derive(Debug, Arbitrary)]
struct Input {
    unsigned: u64,
    signed: i64,
}

// Fuzz target: varint encode->decode roundtrip for u64 and zigzag i64.
//
// Encoded output must decode to the same value and length, and canonical
// encodings must also pass strict decoding.
fuzz_target!(|input: Input| {
    let mut buf = [0u8; 10];

    let len = encode_u64(input.unsigned, &mut buf);
    assert_eq!(len, encoded_len(input.unsigned));
    assert_eq!(decode_u64(&buf[..len]), Ok((input.unsigned, len)));
    assert_eq!(
        decode_u64_with(&buf[..len], &DecodeOptions::strict()),
        Ok((input.unsigned, len))
    );

    let len = encode_i64(input.signed, &mut buf);
    assert_eq!(decode_i64(&buf[..len]), Ok((input.signed, len)));
});
