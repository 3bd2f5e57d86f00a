//! `b64`: encode stdin to base64 on stdout, or decode it with `-d`.
//!
//! Usage:
//!   b64 [-d] [-b BYTES]
//!
//! Errors go to stderr; the exit status is non-zero on failure.

use std::io;

use b64_stream::cli::{exit_code, run, Args};
use b64_stream::StreamConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = run(&args, StreamConfig::default(), &mut input, &mut output) {
        tracing::debug!(error = ?e, "transcode failed");
        eprintln!("b64: {e}");
        std::process::exit(exit_code(&e));
    }
}
