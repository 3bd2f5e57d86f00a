//! Tests for base64 decoding (decode, decode_into).

use b64_stream::{decode, decoded_len, encode, DecodeError};
use proptest::prelude::*;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
        assert_eq!(decode(encoded.as_bytes()).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let invalid = format!("{}!!!!", encoded);
        let result = decode(&invalid);
        if encoded.ends_with('=') {
            // The old padding is now mid-stream and is reported first.
            assert!(matches!(
                result,
                Err(DecodeError::IllegalCharacter { byte: b'=', .. })
            ));
        } else {
            assert_eq!(
                result,
                Err(DecodeError::IllegalCharacter {
                    byte: b'!',
                    offset: encoded.len()
                })
            );
        }
    }
}

#[test]
fn empty_input() {
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn known_vectors() {
    assert_eq!(decode("TWFu").unwrap(), b"Man");
    assert_eq!(decode("TWE=").unwrap(), b"Ma");
    assert_eq!(decode("TQ==").unwrap(), b"M");
    assert_eq!(decode("TWFudQ==").unwrap(), b"Manu");
    assert_eq!(decode("TWFudWs=").unwrap(), b"Manuk");
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn rejects_bad_length() {
    assert!(matches!(
        decode("TWFum"),
        Err(DecodeError::InvalidLength { length: 5 })
    ));
    assert!(matches!(
        decode("TWFu\n\n"),
        Err(DecodeError::InvalidLength { .. })
    ));
}

#[test]
fn rejects_long_padding() {
    assert_eq!(
        decode("TWFum==="),
        Err(DecodeError::PaddingTooLong { count: 3 })
    );
}

#[test]
fn rejects_illegal_character() {
    assert_eq!(
        decode("TWF-"),
        Err(DecodeError::IllegalCharacter {
            byte: b'-',
            offset: 3
        })
    );
    assert!(decode("TWF_").is_err());
    assert!(decode(&[b'T', b'W', b'F', 0xe8][..]).is_err());
}

#[test]
fn validation_precedes_character_checks() {
    // Wrong length wins over the illegal '-'.
    assert!(matches!(
        decode("-WFum"),
        Err(DecodeError::InvalidLength { .. })
    ));
    // Excess padding wins over the illegal '-'.
    assert_eq!(
        decode("-WFu-==="),
        Err(DecodeError::PaddingTooLong { count: 3 })
    );
}

#[test]
fn single_trailing_newline() {
    assert_eq!(decode("TWFudQ==\n").unwrap(), b"Manu");
    assert!(decode("TWFudQ==\n\n").is_err());
    assert!(decode("TWFudQ=\n\n").is_err());
}

#[test]
fn decoded_length_matches() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        assert_eq!(decoded_len(encoded.len(), padding), blob.len());
    }
}

proptest! {
    #[test]
    fn round_trip(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(encode(&blob)).unwrap(), blob);
    }

    #[test]
    fn round_trip_with_newline(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = format!("{}\n", encode(&blob));
        prop_assert_eq!(decode(text).unwrap(), blob);
    }
}
