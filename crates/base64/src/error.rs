//! Error types for the codec and the stream adapter.

use thiserror::Error;

/// Malformed base64 text rejected by [`decode`](crate::decode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length (after the trailing-newline concession) is not a multiple of 4.
    #[error("length must be multiple of 4, got {length}")]
    InvalidLength { length: usize },
    /// More than two trailing padding characters.
    #[error("padding too long: {count} trailing '=' characters, at most 2 allowed")]
    PaddingTooLong { count: usize },
    /// A byte outside the alphabet, or padding in a non-trailing position.
    #[error("illegal character '{}' at offset {offset}", .byte.escape_ascii())]
    IllegalCharacter { byte: u8, offset: usize },
}

impl DecodeError {
    /// Shifts positions and lengths by `base`, turning chunk-relative values
    /// into stream-absolute ones.
    pub(crate) fn offset_by(self, base: u64) -> Self {
        let base = stream_offset(base);
        match self {
            DecodeError::IllegalCharacter { byte, offset } => DecodeError::IllegalCharacter {
                byte,
                offset: base.saturating_add(offset),
            },
            DecodeError::InvalidLength { length } => DecodeError::InvalidLength {
                length: base.saturating_add(length),
            },
            other => other,
        }
    }
}

/// Converts a stream position to `usize`, saturating on 32-bit targets.
pub(crate) fn stream_offset(position: u64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}

/// Failure of a streaming encode or decode.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DecodeError),
    #[error("reading from input stream failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("writing to output stream failed: {0}")]
    Write(#[source] std::io::Error),
}

impl TranscodeError {
    /// Returns true if the input text was malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TranscodeError::InvalidInput(_))
    }

    /// Returns true if the underlying source or sink failed.
    pub fn is_io(&self) -> bool {
        matches!(self, TranscodeError::Read(_) | TranscodeError::Write(_))
    }
}
