/// Varint command-line tool — encode integers, decode and inspect hex
/// byte strings, and run the randomized stress harness against the codec.
///
/// # Command overview
///
/// ```text
/// varint <COMMAND> [OPTIONS]
///
/// Commands:
///   encode     Encode integers and print their varint bytes as hex
///   decode     Decode consecutive varints from a hex string
///   inspect    Show the per-byte layout of a single varint
///   stress     Randomized round-trip and fuzz run with length statistics
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                            |
/// |------|----------------------------------------------------|
/// | 0    | Success                                            |
/// | 1    | Error (bad input, incomplete or invalid varint...) |
///
/// Results go to stdout; logs and error details go to stderr.
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_stress;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The varint command-line tool.
#[derive(Parser)]
#[command(name = "varint", version, about = "LEB128 / zigzag varint codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Encode integers and print their varint bytes as hex.
    Encode(EncodeArgs),
    /// Decode consecutive varints from a hex string.
    Decode(DecodeArgs),
    /// Show the per-byte layout of a single varint.
    Inspect(InspectArgs),
    /// Randomized round-trip and fuzz run with length statistics.
    Stress(StressArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `varint encode`.
///
/// ```text
/// $ varint encode 300 0 16384
/// 300    ac02    (2 bytes)
/// 0      00      (1 byte)
/// 16384  808001  (3 bytes)
/// ```
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Integers to encode (decimal).
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Treat values as `i64` and zigzag them before encoding.
    #[arg(short, long)]
    pub signed: bool,

    /// Emit a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `varint decode`.
///
/// Walks the input from offset 0, decoding one varint after another until
/// the bytes run out. A truncated or invalid varint stops the walk and the
/// command exits 1 after printing what decoded cleanly.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Hex bytes, optionally `0x`-prefixed, whitespace ignored.
    pub hex: String,

    /// Zigzag-decode into `i64`.
    #[arg(short, long)]
    pub signed: bool,

    /// Reject a 10th byte whose payload exceeds bit 63.
    #[arg(long)]
    pub strict: bool,

    /// Emit a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `varint inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Hex bytes of one varint; trailing bytes are ignored.
    pub hex: String,
}

/// Arguments for `varint stress`.
///
/// ```text
/// ┌───────────┬────────────────────────────────────────────────────────┐
/// │ Flag      │ Effect                                                 │
/// ├───────────┼────────────────────────────────────────────────────────┤
/// │ --seed N  │ RNG seed (also read from $SEED; defaults to the clock) │
/// │ --steps N │ Number of passes over each phase                       │
/// │ --size N  │ Values per round-trip pass; fuzz pass runs 5×N buffers │
/// └───────────┴────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct StressArgs {
    /// RNG seed.
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Number of passes.
    #[arg(long, default_value_t = 50)]
    pub steps: usize,

    /// Values per pass.
    #[arg(
        long,
        default_value_t = 100_000,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=cmd_stress::MAX_STRESS_SIZE)
    )]
    pub size: usize,

    /// Emit the final statistics as JSON.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Filter used when `RUST_LOG` is unset. Events are tagged with the
/// binary's crate name (`varint`), not the package name.
fn fallback_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Stress(args) => cmd_stress::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
