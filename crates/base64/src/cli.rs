//! `b64` command-line tool: base64 between stdin and stdout.
//!
//! Provides the logic used by the binary entry point so it can be exercised
//! with in-memory streams.

use std::io::{Read, Write};

use clap::Parser;

use crate::{transcode, Mode, StreamConfig, TranscodeError, TranscodeSummary};

/// Exit status for malformed input.
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Exit status for I/O failures (`EX_IOERR` from sysexits.h).
pub const EXIT_IO_ERROR: i32 = 74;

/// Encode stdin to base64, or decode it with `-d`.
#[derive(Debug, Parser)]
#[command(name = "b64", version, about)]
pub struct Args {
    /// Decode base64 input instead of encoding.
    #[arg(short, long)]
    pub decode: bool,

    /// Read size in bytes, rounded up to a whole number of groups.
    #[arg(short, long, env = "B64_BUFFER_SIZE", value_name = "BYTES")]
    pub buffer_size: Option<usize>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }
}

/// Runs one transcode from `input` to `output` as selected by `args`.
pub fn run<R, W>(
    args: &Args,
    config: StreamConfig,
    input: &mut R,
    output: &mut W,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mode = args.mode();
    let config = config.with_override(args.buffer_size);
    transcode(input, output, config.buffer_size(mode), mode)
}

/// Maps a failure to the process exit status.
pub fn exit_code(err: &TranscodeError) -> i32 {
    if err.is_io() {
        EXIT_IO_ERROR
    } else {
        EXIT_INVALID_INPUT
    }
}
