//! Errors shared by the converter and the checksum codec.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input byte at `position` is not a symbol of the selected alphabet.
    #[error("invalid base58 character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// Output buffer is smaller than `required` bytes. Retrying with a
    /// buffer of exactly `required` bytes succeeds.
    #[error("output buffer too small: {required} bytes required")]
    BufferTooSmall { required: usize },

    /// Checksummed data needs at least a version byte and a 4-byte checksum.
    #[error("base58check data is {len} bytes, at least 5 required")]
    TooShort { len: usize },

    #[error("base58check checksum {actual:02x?} does not match expected {expected:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },

    /// No hash function configured, or the configured one reported failure.
    #[error("checksum hash function unavailable")]
    HashUnavailable,

    #[error("unexpected version byte 0x{actual:02x}, expected 0x{expected:02x}")]
    UnexpectedVersion { expected: u8, actual: u8 },

    #[error("unknown alphabet: {0}")]
    UnknownAlphabet(String),

    /// The decode accumulator overflowed its estimated capacity. Never
    /// expected to happen; indicates a bug in the size estimate.
    #[error("internal error: base conversion exceeded working capacity")]
    CapacityExceeded,
}
