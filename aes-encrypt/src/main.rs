//! AES-128 file encryption under ECB, CBC and CFB
//!
//! Encrypts one input file three times, once per chaining mode, and writes
//! `<prefix>-ecb`, `<prefix>-cbc` and `<prefix>-cfb` (keeping the input's
//! extension). When no IV is given a random one is generated, used for both
//! CBC and CFB, and printed so the run can be reproduced.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use aes_modes::{ModeOrchestrator, StreamingEncryptor, DEFAULT_CHUNK_SIZE, DEFAULT_KEY_HEX};
use clap::Parser;
use log::{debug, error, LevelFilter};

/// Command-line arguments for the AES-128 mode encryptor.
#[derive(Parser, Debug)]
#[command(
    name = "aes-encrypt",
    version,
    about = "Encrypts a file with AES-128 in ECB, CBC and CFB mode, one output file per mode"
)]
struct Cli {
    /// Path to the input file.
    #[arg(help = "Path to the file to encrypt")]
    input: PathBuf,

    /// IV for CBC and CFB.
    #[arg(
        long,
        alias = "IV",
        value_name = "HEX",
        help = "IV for CBC and CFB as 32 hex digits; a random IV is generated and printed when omitted"
    )]
    iv: Option<String>,

    /// Key for the cipher.
    #[arg(short, long, value_name = "HEX", default_value = DEFAULT_KEY_HEX, help = "128-bit key as 32 hex digits")]
    key: String,

    /// Prefix of the output files.
    #[arg(short, long, default_value = "data", help = "Output path prefix, e.g. data -> data-ecb.jpg")]
    output_prefix: PathBuf,

    /// Read size in bytes.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, help = "Bytes read per chunk (any positive size)")]
    chunk_size: NonZeroUsize,

    /// Encrypt the three modes concurrently.
    #[arg(long, help = "Run the three modes in parallel")]
    parallel: bool,

    /// Verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log output (-v, -vv)")]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{cli:?}");

    if !cli.input.is_file() {
        eprintln!("Please pass in a valid file: {} does not exist", cli.input.display());
        return ExitCode::FAILURE;
    }

    let orchestrator = ModeOrchestrator::new()
        .with_encryptor(StreamingEncryptor::with_chunk_size(cli.chunk_size))
        .parallel(cli.parallel);

    let report = match orchestrator.run_all_hex(&cli.key, cli.iv.as_deref(), &cli.input, &cli.output_prefix) {
        Ok(report) => report,
        Err(err) => {
            error!("encryption aborted: {err}");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(iv) = &report.generated_iv {
        println!("IV: {iv}");
    }
    for artifact in &report.artifacts {
        println!("{}: {}", artifact.mode, artifact.path.display());
    }

    ExitCode::SUCCESS
}
