//! Streaming encode/decode over `Read`/`Write`.
//!
//! The adapter reads the source in chunks that are always a whole number of
//! groups, so padding can only be produced in the final chunk. On decode, a
//! chunk that ends in padding must be the last one with content.

use std::io::{ErrorKind, Read, Write};

use tracing::{debug, trace};

use crate::constants::{
    CHARS_PER_GROUP, DEFAULT_DECODE_BUFFER_SIZE, DEFAULT_ENCODE_BUFFER_SIZE, OCTETS_PER_GROUP,
    PAD_BYTE,
};
use crate::error::stream_offset;
use crate::{decode_into, encode_into, DecodeError, TranscodeError};

/// Direction of a transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Size of the unit that must never be split across chunks.
    pub const fn group_size(self) -> usize {
        match self {
            Mode::Encode => OCTETS_PER_GROUP,
            Mode::Decode => CHARS_PER_GROUP,
        }
    }
}

/// Totals for one completed transcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub chunks: u64,
}

/// Rounds `requested` up to a non-zero multiple of `group_size`.
pub const fn aligned_buffer_size(requested: usize, group_size: usize) -> usize {
    let size = if requested < group_size {
        group_size
    } else {
        requested
    };
    size.div_ceil(group_size) * group_size
}

/// Reads until `buf` is full or the source is exhausted.
///
/// A plain `read` may return fewer bytes than asked for while more input is
/// still coming; passing such a chunk on would put padding mid-stream.
fn fill<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Position of the first character of a trailing padding run, if any.
fn padding_start(chunk: &[u8]) -> Option<usize> {
    let padding = chunk.iter().rev().take_while(|&&b| b == PAD_BYTE).count();
    (padding > 0).then(|| chunk.len() - padding)
}

/// Transcodes everything from `source` into `sink`.
///
/// `buffer_size` is rounded up with [`aligned_buffer_size`]. Output already
/// written is not rolled back when a later chunk fails.
///
/// # Errors
///
/// [`TranscodeError::Read`] / [`TranscodeError::Write`] on I/O failure,
/// [`TranscodeError::InvalidInput`] when decoding malformed text. Offsets in
/// the latter are relative to the start of the stream.
pub fn transcode<R, W>(
    source: &mut R,
    sink: &mut W,
    buffer_size: usize,
    mode: Mode,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let effective = aligned_buffer_size(buffer_size, mode.group_size());
    debug!(?mode, requested = buffer_size, effective, "starting transcode");

    let mut input = vec![0u8; effective];
    let mut output = Vec::new();
    let mut summary = TranscodeSummary::default();
    // Stream position of padding that closed an earlier decode chunk.
    let mut padded_at: Option<u64> = None;

    loop {
        let read = fill(source, &mut input).map_err(TranscodeError::Read)?;
        if read == 0 {
            break;
        }
        let chunk = &input[..read];

        output.clear();
        match mode {
            Mode::Encode => encode_into(chunk, &mut output),
            Mode::Decode => {
                decode_into(chunk, &mut output).map_err(|e| e.offset_by(summary.bytes_read))?;
                if let Some(position) = padded_at {
                    // Only the tolerated trailing newline may follow padding.
                    if chunk != b"\n" {
                        return Err(DecodeError::IllegalCharacter {
                            byte: PAD_BYTE,
                            offset: stream_offset(position),
                        }
                        .into());
                    }
                }
                padded_at = padding_start(chunk).map(|i| summary.bytes_read + i as u64);
            }
        }
        sink.write_all(&output).map_err(TranscodeError::Write)?;

        summary.bytes_read += read as u64;
        summary.bytes_written += output.len() as u64;
        summary.chunks += 1;
        trace!(chunk = summary.chunks, read, written = output.len(), "chunk done");
    }

    sink.flush().map_err(TranscodeError::Write)?;
    debug!(
        bytes_read = summary.bytes_read,
        bytes_written = summary.bytes_written,
        chunks = summary.chunks,
        "transcode finished"
    );
    Ok(summary)
}

/// Encodes `source` into `sink` as base64 text.
pub fn encode_stream<R, W>(
    source: &mut R,
    sink: &mut W,
    buffer_size: usize,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    transcode(source, sink, buffer_size, Mode::Encode)
}

/// Decodes base64 text from `source` into `sink`.
pub fn decode_stream<R, W>(
    source: &mut R,
    sink: &mut W,
    buffer_size: usize,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    transcode(source, sink, buffer_size, Mode::Decode)
}

/// [`encode_stream`] with [`DEFAULT_ENCODE_BUFFER_SIZE`].
pub fn encode_stream_default<R, W>(
    source: &mut R,
    sink: &mut W,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    encode_stream(source, sink, DEFAULT_ENCODE_BUFFER_SIZE)
}

/// [`decode_stream`] with [`DEFAULT_DECODE_BUFFER_SIZE`].
pub fn decode_stream_default<R, W>(
    source: &mut R,
    sink: &mut W,
) -> Result<TranscodeSummary, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    decode_stream(source, sink, DEFAULT_DECODE_BUFFER_SIZE)
}
