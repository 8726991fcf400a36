//! Base58 decoding: symbols -> binary.
//! Precomputed reverse table for char->val; Horner's scheme (acc = acc * 58 + val)
//! over a big-endian byte accumulator with exact carry propagation.
//! The accumulator is allocated once at ceil(n * 733 / 1000) + 1 bytes
//! (733/1000 is just over log256(58)) and never grows.

use tracing::{debug, error};

use crate::alphabet::Alphabet;
use crate::{Error, Result};

/// Upper bound on the decoded length of `len` symbols. Every symbol yields
/// at most one byte (leading zero symbols yield exactly one).
#[must_use]
#[inline]
pub fn max_decoded_len(len: usize) -> usize {
    len
}

#[inline]
fn accumulator_len(len: usize) -> usize {
    len.saturating_mul(733).div_ceil(1000) + 1
}

/// Decodes `input` into `output` and returns the number of bytes written.
///
/// # Errors
/// - `InvalidCharacter { byte, position }`: `input[position]` is not in the alphabet.
/// - `BufferTooSmall { required }`: `output` holds fewer than `required`
///   bytes. `output` is left untouched; retrying with exactly `required`
///   bytes succeeds.
/// - `CapacityExceeded`: internal accumulator overflow (not expected).
pub fn decode_into(
    input: impl AsRef<[u8]>,
    output: &mut [u8],
    alphabet: Alphabet,
) -> Result<usize> {
    let input = input.as_ref();
    let table = alphabet.table();
    let zero = table.symbol(0);
    let zeros = input.iter().take_while(|&&b| b == zero).count();

    let mut acc = vec![0u8; accumulator_len(input.len())];
    let cap = acc.len();
    // Bytes in use, counted from the least significant end
    let mut used = 0usize;

    for (position, &byte) in input.iter().enumerate().skip(zeros) {
        let digit = table
            .value(byte)
            .ok_or(Error::InvalidCharacter { byte, position })?;
        let mut carry = u32::from(digit);
        let mut i = 0;
        while i < used || carry != 0 {
            if i == cap {
                error!(len = input.len(), cap, "base58 decode accumulator overflow");
                return Err(Error::CapacityExceeded);
            }
            let slot = &mut acc[cap - 1 - i];
            carry += u32::from(*slot) * 58;
            #[allow(clippy::cast_possible_truncation)]
            {
                *slot = carry as u8;
            }
            carry >>= 8;
            i += 1;
        }
        used = i;
    }

    let significant = &acc[cap - used..];
    let significant = &significant[significant.iter().take_while(|&&b| b == 0).count()..];
    let required = zeros + significant.len();
    if output.len() < required {
        debug!(required, available = output.len(), "base58 decode buffer too small");
        return Err(Error::BufferTooSmall { required });
    }
    output[..zeros].fill(0);
    output[zeros..required].copy_from_slice(significant);
    Ok(required)
}

/// Decodes `input` to an owned byte vector.
///
/// # Errors
/// - `InvalidCharacter { byte, position }`: `input[position]` is not in the alphabet.
#[inline]
pub fn decode(input: impl AsRef<[u8]>, alphabet: Alphabet) -> Result<Vec<u8>> {
    let input = input.as_ref();
    let mut output = vec![0u8; max_decoded_len(input.len())];
    let len = decode_into(input, &mut output, alphabet)?;
    output.truncate(len);
    Ok(output)
}
