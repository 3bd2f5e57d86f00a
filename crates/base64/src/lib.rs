//! Base64 encoding and decoding, in memory and over streams.
//!
//! This crate provides:
//! - Standard base64 (RFC 4648 alphabet, `=` padding, no line wrapping)
//! - Strict decoding with typed errors; one trailing newline is tolerated
//! - A stream adapter that transcodes any `Read` into any `Write` in
//!   group-aligned chunks
//!
//! # Example
//!
//! ```
//! use b64_stream::{decode, encode, encode_stream};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(decode(&encoded).unwrap(), data);
//!
//! let mut out = Vec::new();
//! encode_stream(&mut &data[..], &mut out, 6).unwrap();
//! assert_eq!(out, encoded.as_bytes());
//! ```

pub mod cli;
mod config;
mod constants;
mod decode;
mod encode;
mod error;
mod stream;

pub use config::StreamConfig;
pub use constants::{
    ALPHABET, ALPHABET_BYTES, CHARS_PER_GROUP, DEFAULT_DECODE_BUFFER_SIZE,
    DEFAULT_ENCODE_BUFFER_SIZE, MAX_PADDING, OCTETS_PER_GROUP, PAD,
};
pub use decode::{decode, decode_into, decoded_len};
pub use encode::{encode, encode_into, encoded_len};
pub use error::{DecodeError, TranscodeError};
pub use stream::{
    aligned_buffer_size, decode_stream, decode_stream_default, encode_stream,
    encode_stream_default, transcode, Mode, TranscodeSummary,
};
