//! Base58 and `Base58Check` codec with selectable alphabets.
//!
//! ```
//! use b58check::{encode, decode, Alphabet, CheckCodec};
//!
//! assert_eq!(encode(b"Hello World", Alphabet::Bitcoin), "JxF12TrwUP45BMd");
//! assert_eq!(decode("JxF12TrwUP45BMd", Alphabet::Bitcoin).unwrap(), b"Hello World");
//!
//! let addr = CheckCodec::bitcoin().decode("1BitcoinEaterAddressDontSendf59kuE").unwrap();
//! assert_eq!(addr.version, 0x00);
//! assert_eq!(addr.payload.len(), 20);
//! ```

pub mod alphabet;
pub mod hash;

mod check;
mod decode;
mod encode;
mod error;

pub use alphabet::Alphabet;
pub use check::{CheckCodec, Versioned, CHECKSUM_LEN, MIN_CHECKED_LEN};
pub use decode::{decode, decode_into, max_decoded_len};
pub use encode::{encode, encode_into, max_encoded_len};
pub use error::{Error, Result};
pub use hash::{ChecksumHash, Sha256, DIGEST_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alphabet() -> impl Strategy<Value = Alphabet> {
        prop_oneof![Just(Alphabet::Bitcoin), Just(Alphabet::Ripple)]
    }

    /// Bytes with an explicit run of leading zeros.
    fn zero_prefixed() -> impl Strategy<Value = (usize, Vec<u8>)> {
        (0usize..8, proptest::collection::vec(any::<u8>(), 0..64)).prop_map(|(k, rest)| {
            let mut bytes = vec![0u8; k];
            bytes.extend(rest);
            (k, bytes)
        })
    }

    proptest! {
        #[test]
        fn round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128), alphabet in alphabet()) {
            let encoded = encode(&bytes, alphabet);
            prop_assert_eq!(decode(&encoded, alphabet)?, bytes);
        }

        #[test]
        fn leading_zeros_preserved((k, bytes) in zero_prefixed(), alphabet in alphabet()) {
            let zeros = bytes.iter().take_while(|&&b| b == 0).count();
            prop_assert!(zeros >= k);
            let encoded = encode(&bytes, alphabet);
            let zero = char::from(alphabet.zero_symbol());
            let leading = encoded.chars().take_while(|&c| c == zero).count();
            prop_assert_eq!(leading, zeros);
        }

        #[test]
        fn minimal_strings_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64), alphabet in alphabet()) {
            // Every encoder output is minimal, so it must re-encode to itself
            let encoded = encode(&bytes, alphabet);
            let decoded = decode(&encoded, alphabet)?;
            prop_assert_eq!(encode(&decoded, alphabet), encoded);
        }

        #[test]
        fn probe_then_fill(bytes in proptest::collection::vec(any::<u8>(), 1..64), alphabet in alphabet()) {
            let required = match encode_into(&bytes, &mut [], alphabet) {
                Err(Error::BufferTooSmall { required }) => required,
                other => return Err(TestCaseError::fail(format!("{other:?}"))),
            };
            let mut symbols = vec![0u8; required];
            prop_assert_eq!(encode_into(&bytes, &mut symbols, alphabet), Ok(required));

            let required = match decode_into(&symbols, &mut [], alphabet) {
                Err(Error::BufferTooSmall { required }) => required,
                other => return Err(TestCaseError::fail(format!("{other:?}"))),
            };
            prop_assert_eq!(required, bytes.len());
            let mut out = vec![0u8; required];
            prop_assert_eq!(decode_into(&symbols, &mut out, alphabet), Ok(required));
            prop_assert_eq!(out, bytes);
        }

        #[test]
        fn check_round_trip(version in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 0..64)) {
            for codec in [CheckCodec::bitcoin(), CheckCodec::ripple()] {
                let encoded = codec.encode(version, &payload)?;
                let decoded = codec.decode(&encoded)?;
                prop_assert_eq!(decoded.version, version);
                prop_assert_eq!(&decoded.payload, &payload);
            }
        }

        #[test]
        fn check_single_symbol_tamper(
            payload in proptest::collection::vec(any::<u8>(), 0..32),
            position in any::<prop::sample::Index>(),
            digit in 1u8..58,
        ) {
            let codec = CheckCodec::bitcoin();
            let encoded = codec.encode(0x00, &payload)?;
            let mut tampered = encoded.into_bytes();
            let i = position.index(tampered.len());
            let table = Alphabet::Bitcoin.table();
            let current = table.value(tampered[i]).unwrap_or_default();
            tampered[i] = table.symbol((current + digit) % 58);
            // A dropped leading digit can shrink an empty payload below 5 bytes
            let result = codec.decode(&tampered);
            let rejected = matches!(
                result,
                Err(Error::ChecksumMismatch { .. } | Error::InvalidCharacter { .. } | Error::TooShort { .. })
            );
            prop_assert!(rejected, "tampered input decoded: {:?}", result);
        }
    }
}
