/// Implementation of `varint stress`.
///
/// Two phases, each repeated `--steps` times:
///
/// ```text
/// 1. Round trip — encode `size` random u64 back to back into one buffer,
///                 walk it with decode_u64 and compare; then the same with
///                 random i64 through the zigzag pair.
/// 2. Fuzz       — 5×size random buffers of 0..=15 bytes through
///                 decode_i64, then 5×size more through decode_u64.
/// ```
///
/// Every encode and decode outcome is tallied:
///
/// ```text
/// seed=1729
///   ok=20000000 (...)   ← count per encoded length 1..=10
///   zero=...            ← Incomplete
///   bad=...             ← Invalid
/// ```
///
/// Random values are drawn with a magnitude spread over powers of ten so
/// every encoded length shows up, not just the 9- and 10-byte ones a
/// uniform u64 would give.
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};
use varint_wire::{
    MAX_VARINT_BYTES, VarintError, decode_i64, decode_u64, encode_i64, encode_u64,
};

use crate::StressArgs;

/// Longest random buffer handed to the decoders in the fuzz phase.
const FUZZ_MAX_LEN: usize = 15;

/// Upper bound for `--size`; one pass buffers `10 × size` bytes.
pub(crate) const MAX_STRESS_SIZE: u64 = 10_000_000;

/// Outcome tally across a run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct Stats {
    /// `lengths[n]` counts successes that wrote or consumed `n` bytes.
    lengths: [usize; MAX_VARINT_BYTES + 1],
    oks: usize,
    zeros: usize,
    bads: usize,
}

impl Stats {
    fn add<T>(&mut self, outcome: &Result<(T, usize), VarintError>) {
        match outcome {
            Ok((_, n)) => {
                self.oks += 1;
                self.lengths[*n] += 1;
            }
            Err(e) if e.is_incomplete() => self.zeros += 1,
            Err(_) => self.bads += 1,
        }
    }

    fn add_written(&mut self, n: usize) {
        self.oks += 1;
        self.lengths[n] += 1;
    }

    fn render(&self) -> String {
        let per_len: Vec<String> = self.lengths[1..].iter().map(ToString::to_string).collect();
        format!(
            "  ok={} ({})\n  zero={}\n  bad={}",
            self.oks,
            per_len.join(" "),
            self.zeros,
            self.bads
        )
    }
}

/// Run the `varint stress` command.
///
/// # Errors
///
/// Returns an error if any value fails to round-trip.
pub fn run(args: &StressArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    if !args.json {
        println!("seed={seed}");
    }
    info!(seed, steps = args.steps, size = args.size, "stress run starting");

    let mut rng = SmallRng::seed_from_u64(seed);

    let mut roundtrip = Stats::default();
    for step in 0..args.steps {
        roundtrip_pass(&mut rng, args.size, &mut roundtrip)?;
        debug!(step, "round-trip pass complete");
    }

    let fuzz_count = args
        .size
        .checked_mul(5)
        .with_context(|| format!("--size {} is too large", args.size))?;
    let mut fuzz = Stats::default();
    for step in 0..args.steps {
        fuzz_pass(&mut rng, fuzz_count, &mut fuzz);
        debug!(step, "fuzz pass complete");
    }

    if args.json {
        println!(
            "{}",
            serde_json::json!({ "seed": seed, "roundtrip": roundtrip, "fuzz": fuzz })
        );
    } else {
        println!("[RANDOMS]\n{}", roundtrip.render());
        println!("[FUZZING]\n{}", fuzz.render());
        println!("PASSED");
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// A u64 reduced modulo 10^n for a random n in 0..=18, or left whole
/// with probability 1/20.
fn random_u64(rng: &mut impl Rng) -> u64 {
    let x: u64 = rng.random();
    let digits: u32 = rng.random_range(0..20);
    if digits <= 18 { x % 10u64.pow(digits) } else { x }
}

#[allow(clippy::cast_possible_wrap)]
fn random_i64(rng: &mut impl Rng) -> i64 {
    random_u64(rng) as i64
}

/// Encode `size` random values into one buffer, decode them back in order.
pub(crate) fn roundtrip_pass(rng: &mut impl Rng, size: usize, stats: &mut Stats) -> Result<()> {
    let capacity = size
        .checked_mul(MAX_VARINT_BYTES)
        .with_context(|| format!("size {size} overflows the pass buffer"))?;
    let mut data = vec![0u8; capacity];

    let uints: Vec<u64> = (0..size).map(|_| random_u64(rng)).collect();
    let mut n = 0;
    for &x in &uints {
        let written = encode_u64(x, &mut data[n..]);
        stats.add_written(written);
        n += written;
    }
    let mut n = 0;
    for (i, &x) in uints.iter().enumerate() {
        let outcome = decode_u64(&data[n..]);
        stats.add(&outcome);
        match outcome {
            Ok((decoded, read)) if decoded == x => n += read,
            other => bail!("u64 #{i} ({x}) did not round-trip: {other:?}"),
        }
    }

    let ints: Vec<i64> = (0..size).map(|_| random_i64(rng)).collect();
    let mut n = 0;
    for &x in &ints {
        let written = encode_i64(x, &mut data[n..]);
        stats.add_written(written);
        n += written;
    }
    let mut n = 0;
    for (i, &x) in ints.iter().enumerate() {
        let outcome = decode_i64(&data[n..]);
        stats.add(&outcome);
        match outcome {
            Ok((decoded, read)) if decoded == x => n += read,
            other => bail!("i64 #{i} ({x}) did not round-trip: {other:?}"),
        }
    }

    Ok(())
}

/// Decode `count` short random buffers with each decoder. Only the
/// outcome counts; any panic here is the failure being hunted.
pub(crate) fn fuzz_pass(rng: &mut impl Rng, count: usize, stats: &mut Stats) {
    let mut buf = [0u8; FUZZ_MAX_LEN];
    for _ in 0..count {
        let len = rng.random_range(0..=FUZZ_MAX_LEN);
        rng.fill(&mut buf[..len]);
        stats.add(&decode_i64(&buf[..len]));
    }
    for _ in 0..count {
        let len = rng.random_range(0..=FUZZ_MAX_LEN);
        rng.fill(&mut buf[..len]);
        stats.add(&decode_u64(&buf[..len]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn roundtrip_pass_succeeds_and_counts() {
        let mut stats = Stats::default();
        roundtrip_pass(&mut rng(), 500, &mut stats).unwrap();
        // 500 u64 + 500 i64, each encoded once and decoded once.
        assert_eq!(stats.oks, 2000);
        assert_eq!(stats.zeros, 0);
        assert_eq!(stats.bads, 0);
        assert_eq!(stats.lengths[0], 0);
    }

    #[test]
    fn roundtrip_pass_rejects_oversized_buffer() {
        let mut stats = Stats::default();
        let err = roundtrip_pass(&mut rng(), usize::MAX, &mut stats).unwrap_err();
        assert!(err.to_string().contains("overflows"));
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn fuzz_pass_classifies_every_buffer() {
        let mut stats = Stats::default();
        fuzz_pass(&mut rng(), 1000, &mut stats);
        assert_eq!(stats.oks + stats.zeros + stats.bads, 2000);
        assert_eq!(stats.lengths.iter().sum::<usize>(), stats.oks);
        // Empty buffers alone make Incomplete show up.
        assert!(stats.zeros > 0);
    }

    #[test]
    fn same_seed_same_stats() {
        let mut a = Stats::default();
        let mut b = Stats::default();
        fuzz_pass(&mut rng(), 200, &mut a);
        fuzz_pass(&mut rng(), 200, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn random_u64_covers_short_encodings() {
        let mut rng = rng();
        let short = (0..1000)
            .map(|_| random_u64(&mut rng))
            .filter(|&x| x < 128)
            .count();
        assert!(short > 0);
    }

    #[test]
    fn stats_tally() {
        let mut stats = Stats::default();
        stats.add(&Ok::<_, VarintError>((300u64, 2)));
        stats.add::<u64>(&Err(VarintError::Incomplete { available: 0 }));
        stats.add::<u64>(&Err(VarintError::Invalid));
        assert_eq!(stats.render(), "  ok=1 (0 1 0 0 0 0 0 0 0 0)\n  zero=1\n  bad=1");
    }
}
