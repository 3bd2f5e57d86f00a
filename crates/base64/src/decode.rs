//! Standard base64 decoding.

use crate::constants::{
    CHARS_PER_GROUP, INVALID, MAX_PADDING, OCTETS_PER_GROUP, OCTET_BITS, OCTET_MASK, PAD_BYTE,
    REVERSE, SEXTET_BITS, SEXTET_MASK,
};
use crate::DecodeError;

/// Returns the decoded length of `text_len` characters carrying `padding`
/// trailing padding characters.
///
/// `text_len` must be a multiple of [`CHARS_PER_GROUP`].
pub const fn decoded_len(text_len: usize, padding: usize) -> usize {
    text_len / CHARS_PER_GROUP * OCTETS_PER_GROUP - padding
}

/// Drops one trailing newline when it is the only thing breaking group alignment.
fn strip_newline(text: &[u8]) -> &[u8] {
    match text.split_last() {
        Some((b'\n', rest)) if text.len() % CHARS_PER_GROUP == 1 => rest,
        _ => text,
    }
}

/// Counts trailing padding characters, rejecting runs longer than [`MAX_PADDING`].
fn padding_len(text: &[u8]) -> Result<usize, DecodeError> {
    let padding = text.iter().rev().take_while(|&&b| b == PAD_BYTE).count();
    if padding > MAX_PADDING {
        return Err(DecodeError::PaddingTooLong { count: padding });
    }
    Ok(padding)
}

/// Checks length and padding before any character is looked at.
///
/// Returns the text without the tolerated newline, and the padding count.
fn validate(text: &[u8]) -> Result<(&[u8], usize), DecodeError> {
    let text = strip_newline(text);
    if text.len() % CHARS_PER_GROUP != 0 {
        return Err(DecodeError::InvalidLength { length: text.len() });
    }
    let padding = padding_len(text)?;
    Ok((text, padding))
}

/// Decodes one group of 2 to 4 characters (padding already removed).
///
/// `offset` is the position of the group's first character, used for errors.
#[inline]
fn decode_group(group: &[u8], offset: usize) -> Result<([u8; OCTETS_PER_GROUP], usize), DecodeError> {
    debug_assert!(group.len() > 1 && group.len() <= CHARS_PER_GROUP);

    let mut bits: u32 = 0;
    for (i, &byte) in group.iter().enumerate() {
        let sextet = REVERSE[byte as usize];
        if sextet == INVALID {
            return Err(DecodeError::IllegalCharacter {
                byte,
                offset: offset + i,
            });
        }
        let shift = SEXTET_BITS * (CHARS_PER_GROUP - 1 - i) as u32;
        bits |= (sextet as u32 & SEXTET_MASK) << shift;
    }

    let mut out = [0u8; OCTETS_PER_GROUP];
    let content = OCTETS_PER_GROUP - (CHARS_PER_GROUP - group.len());
    for (i, slot) in out.iter_mut().take(content).enumerate() {
        let shift = OCTET_BITS * (OCTETS_PER_GROUP - 1 - i) as u32;
        *slot = ((bits >> shift) & OCTET_MASK) as u8;
    }
    Ok((out, content))
}

/// Decodes standard base64 text.
///
/// Accepts anything byte-like: `&str`, `String`, `&[u8]`, `Vec<u8>`. A single
/// trailing newline is tolerated.
///
/// # Errors
///
/// Returns [`DecodeError`] if the length is not a multiple of 4, if there are
/// more than two padding characters, or if any character is outside the
/// alphabet.
///
/// # Example
///
/// ```
/// use b64_stream::decode;
///
/// assert_eq!(decode("TWFu").unwrap(), b"Man");
/// assert_eq!(decode("TQ==\n").unwrap(), b"M");
/// assert!(decode("TWF-").is_err());
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    decode_into(text, &mut out)?;
    Ok(out)
}

/// Appends the decoded form of `text` to `out`.
///
/// On error `out` is left as it was before the call.
pub fn decode_into(text: impl AsRef<[u8]>, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let (text, padding) = validate(text.as_ref())?;
    if text.is_empty() {
        return Ok(());
    }

    let start = out.len();
    out.reserve_exact(decoded_len(text.len(), padding));

    let content = &text[..text.len() - padding];
    for (index, group) in content.chunks(CHARS_PER_GROUP).enumerate() {
        match decode_group(group, index * CHARS_PER_GROUP) {
            Ok((octets, len)) => out.extend_from_slice(&octets[..len]),
            Err(err) => {
                out.truncate(start);
                return Err(err);
            }
        }
    }
    Ok(())
}
