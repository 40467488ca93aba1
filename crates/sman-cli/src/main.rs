/// SMAN command-line tool — inspect, validate, encode, and decode files of
/// newline-delimited SMAN messages.
///
/// # Command overview
///
/// ```text
/// sman <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a per-record breakdown of every message
///   validate   Check a file for structural correctness
///   encode     Create a SMAN file from a JSON manifest
///   decode     Render a SMAN file as JSON
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, malformed message)  |
///
/// All error details are written to stderr so stdout can be piped cleanly.
///
/// The tool is line-oriented, matching how SMAN files are produced: one
/// message per line. Values containing raw line feeds are legal at the
/// codec layer but not representable in a line-oriented file.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The SMAN codec command-line tool.
#[derive(Parser)]
#[command(name = "sman", version, about = "SMAN message codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a per-record breakdown of every message in a SMAN file.
    Inspect(InspectArgs),
    /// Check a SMAN file for structural correctness.
    Validate(ValidateArgs),
    /// Create a SMAN file from a JSON manifest.
    Encode(EncodeArgs),
    /// Render a SMAN file as JSON.
    Decode(DecodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `sman inspect`.
///
/// Walks every line at the record level and prints one row per tag:
/// source offset, wire id, constructor flag, value length. Useful for
/// eyeballing what a message contains without writing custom tooling.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the SMAN file to inspect.
    pub file: PathBuf,

    /// Show each record's value (UTF-8 lossy, truncated to 60 characters).
    #[arg(long)]
    pub show_value: bool,

    /// Report raw wire ids instead of masking the constructor bit.
    #[arg(long)]
    pub raw_ids: bool,
}

/// Arguments for `sman validate`.
///
/// Attempts a full record-level walk of every line and reports either a
/// success summary or the first diagnostic failure. The process exits with
/// code 0 on a valid file and code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the SMAN file to validate.
    pub file: PathBuf,
}

/// Arguments for `sman encode`.
///
/// Reads a JSON manifest describing the messages to encode, then writes
/// them as newline-delimited SMAN. The manifest format is:
///
/// ```json
/// {
///   "messages": [
///     { "type": 4097,
///       "tags": [ { "id": 4096, "value": "ABCD" },
///                 { "id": 8192, "value": "X" } ] }
///   ]
/// }
/// ```
///
/// Tag values are UTF-8 strings in the manifest; `type_value` may be set
/// for constructor records that nest content.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest file describing the messages to encode.
    pub input: PathBuf,

    /// Output SMAN file path.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for `sman decode`.
///
/// Decodes every line as a message and prints a JSON array on stdout (or
/// to a file), in the same shape `sman encode` accepts — decode piped back
/// into encode reproduces the input file.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the SMAN file to decode.
    pub file: PathBuf,

    /// Write JSON output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
