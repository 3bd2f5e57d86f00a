/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';

/// Number of raw octets in one group.
pub const OCTETS_PER_GROUP: usize = 3;

/// Number of encoded characters in one group.
pub const CHARS_PER_GROUP: usize = 4;

/// Maximum number of trailing padding characters in valid input.
pub const MAX_PADDING: usize = 2;

/// Default read size for streaming encode. A multiple of [`OCTETS_PER_GROUP`].
pub const DEFAULT_ENCODE_BUFFER_SIZE: usize = 4500;

/// Default read size for streaming decode. A multiple of [`CHARS_PER_GROUP`].
pub const DEFAULT_DECODE_BUFFER_SIZE: usize = 4800;

pub(crate) const SEXTET_BITS: u32 = 6;
pub(crate) const OCTET_BITS: u32 = 8;
pub(crate) const SEXTET_MASK: u32 = 0b11_1111;
pub(crate) const OCTET_MASK: u32 = 0xff;

/// Marks bytes that are not part of the alphabet in [`REVERSE`].
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup table: byte value -> sextet, or [`INVALID`].
pub(crate) static REVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_bijective() {
        for (i, &c) in ALPHABET_BYTES.iter().enumerate() {
            assert_eq!(REVERSE[c as usize], i as u8, "char {}", c as char);
        }
        let valid = REVERSE.iter().filter(|&&v| v != INVALID).count();
        assert_eq!(valid, 64);
    }

    #[test]
    fn padding_is_outside_alphabet() {
        assert_eq!(REVERSE[PAD_BYTE as usize], INVALID);
        assert!(!ALPHABET.contains(PAD));
    }

    #[test]
    fn default_buffer_sizes_are_aligned() {
        assert_eq!(DEFAULT_ENCODE_BUFFER_SIZE % OCTETS_PER_GROUP, 0);
        assert_eq!(DEFAULT_DECODE_BUFFER_SIZE % CHARS_PER_GROUP, 0);
    }
}
