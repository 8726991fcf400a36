//! Hash function injection for the checksum codec.

use sha2::{Digest, Sha256 as Sha256Digest};

/// Digest length produced by a [`ChecksumHash`].
pub const DIGEST_LEN: usize = 32;

/// A deterministic 256-bit digest. Implementations used from several
/// threads must be safe to call concurrently.
pub trait ChecksumHash {
    /// Hashes `input` into `output`. Returns `false` on failure.
    fn hash(&self, input: &[u8], output: &mut [u8; DIGEST_LEN]) -> bool;
}

impl<F> ChecksumHash for F
where
    F: Fn(&[u8], &mut [u8; DIGEST_LEN]) -> bool,
{
    fn hash(&self, input: &[u8], output: &mut [u8; DIGEST_LEN]) -> bool {
        self(input, output)
    }
}

/// SHA-256, the digest Bitcoin and Ripple checksums are built on.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256;

impl ChecksumHash for Sha256 {
    #[inline]
    fn hash(&self, input: &[u8], output: &mut [u8; DIGEST_LEN]) -> bool {
        output.copy_from_slice(&Sha256Digest::digest(input));
        true
    }
}
