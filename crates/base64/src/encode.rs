//! Standard base64 encoding.

use crate::constants::{
    ALPHABET_BYTES, CHARS_PER_GROUP, OCTETS_PER_GROUP, OCTET_BITS, OCTET_MASK, PAD_BYTE,
    SEXTET_BITS, SEXTET_MASK,
};

/// Returns the encoded length of `len` raw bytes, padding included.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(OCTETS_PER_GROUP) * CHARS_PER_GROUP
}

/// Encodes one group of 1 to 3 octets into four characters.
///
/// Missing octets count as zero; the slots they would have produced are
/// filled with padding.
#[inline]
fn encode_group(group: &[u8]) -> [u8; CHARS_PER_GROUP] {
    debug_assert!(!group.is_empty() && group.len() <= OCTETS_PER_GROUP);

    let mut bits: u32 = 0;
    for (i, &octet) in group.iter().enumerate() {
        let shift = OCTET_BITS * (OCTETS_PER_GROUP - 1 - i) as u32;
        bits |= (octet as u32 & OCTET_MASK) << shift;
    }

    let mut out = [PAD_BYTE; CHARS_PER_GROUP];
    let content = CHARS_PER_GROUP - (OCTETS_PER_GROUP - group.len());
    for (i, slot) in out.iter_mut().take(content).enumerate() {
        let shift = SEXTET_BITS * (CHARS_PER_GROUP - 1 - i) as u32;
        *slot = ALPHABET_BYTES[((bits >> shift) & SEXTET_MASK) as usize];
    }
    out
}

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use b64_stream::encode;
///
/// assert_eq!(encode(b"Man"), "TWFu");
/// assert_eq!(encode(b"M"), "TQ==");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for group in bytes.chunks(OCTETS_PER_GROUP) {
        for c in encode_group(group) {
            out.push(c as char);
        }
    }
    out
}

/// Appends the base64 encoding of `bytes` to `out`.
///
/// Reserves exactly [`encoded_len`] additional bytes.
pub fn encode_into(bytes: &[u8], out: &mut Vec<u8>) {
    out.reserve_exact(encoded_len(bytes.len()));
    for group in bytes.chunks(OCTETS_PER_GROUP) {
        out.extend_from_slice(&encode_group(group));
    }
}
