#![no_main]

use libfuzzer_sys::fuzz_target;
use varint_wire::{decode_i64_with, decode_u64_with, DecodeOptions, VarintError};

// Fuzz target: both decoders on arbitrary bytes, both overflow policies.
//
// Beyond not panicking, every outcome must agree with the input:
// - success consumes 1..=10 bytes and stops on a terminal byte
// - Incomplete only when fewer than 10 bytes were available
// - Invalid only when at least 10 bytes were available
fuzz_target!(|data: &[u8]| {
    for options in [DecodeOptions::default(), DecodeOptions::strict()] {
        let outcomes = [
            decode_u64_with(data, &options).map(|(_, n)| n),
            decode_i64_with(data, &options).map(|(_, n)| n),
        ];
        for outcome in outcomes {
            match outcome {
                Ok(n) => {
                    assert!((1..=10).contains(&n) && n <= data.len());
                    assert_eq!(data[n - 1] & 0x80, 0);
                }
                Err(VarintError::Incomplete { available }) => {
                    assert_eq!(available, data.len());
                    assert!(data.len() < 10);
                }
                Err(VarintError::Invalid) => assert!(data.len() >= 10),
                Err(VarintError::Overflow { byte }) => {
                    assert_eq!(options, DecodeOptions::strict());
                    assert_eq!(byte, data[9]);
                }
            }
        }
    }
});
