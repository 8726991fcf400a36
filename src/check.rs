//! `Base58Check`: version byte + payload + 4-byte double-hash checksum.
//! The hash function is an explicit capability on [`CheckCodec`]; nothing is
//! configured globally.

use std::fmt;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::hash::{ChecksumHash, Sha256, DIGEST_LEN};
use crate::{decode, encode_into, max_encoded_len, Error, Result};

/// Checksum bytes appended to the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Smallest checksummed message: version byte plus checksum.
pub const MIN_CHECKED_LEN: usize = 1 + CHECKSUM_LEN;

static SHA256: Sha256 = Sha256;

/// `Base58Check` encoder/decoder bound to an alphabet and a hash function.
///
/// Cheap to copy and safe to share across threads.
#[derive(Clone, Copy)]
pub struct CheckCodec<'h> {
    alphabet: Alphabet,
    hasher: Option<&'h (dyn ChecksumHash + Sync)>,
}

impl fmt::Debug for CheckCodec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckCodec")
            .field("alphabet", &self.alphabet)
            .field("hasher", &self.hasher.map(|_| "..."))
            .finish()
    }
}

impl CheckCodec<'static> {
    /// Bitcoin alphabet with double SHA-256.
    #[must_use]
    pub fn bitcoin() -> Self {
        CheckCodec::new(Alphabet::Bitcoin).with_hasher(&SHA256)
    }

    /// Ripple alphabet with double SHA-256.
    #[must_use]
    pub fn ripple() -> Self {
        CheckCodec::new(Alphabet::Ripple).with_hasher(&SHA256)
    }
}

impl<'h> CheckCodec<'h> {
    /// Codec without a hash function; every operation fails with
    /// `HashUnavailable` until one is supplied via [`Self::with_hasher`].
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        CheckCodec {
            alphabet,
            hasher: None,
        }
    }

    #[must_use]
    pub fn with_hasher(self, hasher: &'h (dyn ChecksumHash + Sync)) -> Self {
        CheckCodec {
            hasher: Some(hasher),
            ..self
        }
    }

    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn hasher(&self) -> Result<&'h (dyn ChecksumHash + Sync)> {
        self.hasher.ok_or_else(|| {
            debug!("base58check used without a hash function");
            Error::HashUnavailable
        })
    }

    /// First 4 bytes of `hash(hash(data))`.
    ///
    /// # Errors
    /// - `HashUnavailable`: no hash function, or it reported failure.
    pub fn checksum(&self, data: &[u8]) -> Result<[u8; CHECKSUM_LEN]> {
        let hasher = self.hasher()?;
        let mut first = [0u8; DIGEST_LEN];
        let mut second = [0u8; DIGEST_LEN];
        if !hasher.hash(data, &mut first) || !hasher.hash(&first, &mut second) {
            debug!(len = data.len(), "checksum hash function failed");
            return Err(Error::HashUnavailable);
        }
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&second[..CHECKSUM_LEN]);
        Ok(checksum)
    }

    /// Encodes `version || payload || checksum` into `output` and returns
    /// the number of symbols written.
    ///
    /// # Errors
    /// - `HashUnavailable`: no hash function, or it reported failure.
    /// - `BufferTooSmall { required }`: `output` is shorter than `required`.
    pub fn encode_into(&self, version: u8, payload: &[u8], output: &mut [u8]) -> Result<usize> {
        let staged = self.stage(version, payload)?;
        encode_into(&staged, output, self.alphabet)
    }

    /// Encodes `version || payload || checksum` to an owned string.
    ///
    /// # Errors
    /// - `HashUnavailable`: no hash function, or it reported failure.
    pub fn encode(&self, version: u8, payload: &[u8]) -> Result<String> {
        let staged = self.stage(version, payload)?;
        let mut output = vec![0u8; max_encoded_len(staged.len())];
        let len = encode_into(&staged, &mut output, self.alphabet)?;
        output.truncate(len);
        Ok(output.into_iter().map(char::from).collect())
    }

    fn stage(&self, version: u8, payload: &[u8]) -> Result<Vec<u8>> {
        let mut staged = Vec::with_capacity(payload.len() + MIN_CHECKED_LEN);
        staged.push(version);
        staged.extend_from_slice(payload);
        let checksum = self.checksum(&staged)?;
        staged.extend_from_slice(&checksum);
        Ok(staged)
    }

    /// Decodes and verifies `input`, copies the payload into `output` and
    /// returns the version byte and payload length.
    ///
    /// # Errors
    /// - `HashUnavailable`: no hash function, or it reported failure.
    /// - `InvalidCharacter { byte, position }`: `input[position]` is not in the alphabet.
    /// - `TooShort { len }`: fewer than 5 decoded bytes.
    /// - `ChecksumMismatch { expected, actual }`: checksum does not match.
    /// - `BufferTooSmall { required }`: `output` is shorter than the payload.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut [u8]) -> Result<(u8, usize)> {
        let decoded = self.verify(input.as_ref())?;
        let payload = &decoded[1..decoded.len() - CHECKSUM_LEN];
        if output.len() < payload.len() {
            debug!(
                required = payload.len(),
                available = output.len(),
                "base58check payload buffer too small"
            );
            return Err(Error::BufferTooSmall {
                required: payload.len(),
            });
        }
        output[..payload.len()].copy_from_slice(payload);
        Ok((decoded[0], payload.len()))
    }

    /// Decodes and verifies `input`.
    ///
    /// # Errors
    /// Same as [`Self::decode_into`], without `BufferTooSmall`.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Versioned> {
        let mut decoded = self.verify(input.as_ref())?;
        decoded.truncate(decoded.len() - CHECKSUM_LEN);
        let version = decoded.remove(0);
        Ok(Versioned {
            version,
            payload: decoded,
        })
    }

    /// Decodes and verifies `input`, then requires its version byte to be
    /// `expected`. Returns the payload.
    ///
    /// # Errors
    /// Same as [`Self::decode`], plus `UnexpectedVersion { expected, actual }`.
    pub fn decode_versioned(&self, input: impl AsRef<[u8]>, expected: u8) -> Result<Vec<u8>> {
        let Versioned { version, payload } = self.decode(input)?;
        if version != expected {
            debug!(expected, actual = version, "base58check version mismatch");
            return Err(Error::UnexpectedVersion {
                expected,
                actual: version,
            });
        }
        Ok(payload)
    }

    /// Decodes `input` and checks its trailing checksum. Returns the whole
    /// decoded message, at least [`MIN_CHECKED_LEN`] bytes long.
    fn verify(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.hasher()?;
        let decoded = decode(input, self.alphabet)?;
        if decoded.len() < MIN_CHECKED_LEN {
            return Err(Error::TooShort { len: decoded.len() });
        }
        let (data, tail) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        let expected = self.checksum(data)?;
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(tail);
        if expected != actual {
            debug!(?expected, ?actual, "base58check checksum mismatch");
            return Err(Error::ChecksumMismatch { expected, actual });
        }
        Ok(decoded)
    }
}

/// A verified `Base58Check` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    pub version: u8,
    pub payload: Vec<u8>,
}

impl Versioned {
    #[must_use]
    pub fn new(version: u8, payload: impl Into<Vec<u8>>) -> Self {
        Versioned {
            version,
            payload: payload.into(),
        }
    }

    /// Re-encodes this message with `codec`.
    ///
    /// # Errors
    /// - `HashUnavailable`: `codec` has no working hash function.
    pub fn to_base58check(&self, codec: &CheckCodec<'_>) -> Result<String> {
        codec.encode(self.version, &self.payload)
    }
}
