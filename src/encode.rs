//! Base58 encoding: binary -> symbols.
//! Big-endian input is packed into u64 limbs (low limb first) and repeatedly
//! divided by 58 with a u128 intermediate; remainders come out least
//! significant first and are copied out in reverse.
//! Leading zero bytes map 1:1 to the alphabet's zero symbol.
use tracing::debug;

use crate::alphabet::{Alphabet, Table};
use crate::{Error, Result};

/// Upper bound on the encoded length of `len` input bytes.
/// 138/100 is just over log58(256).
#[must_use]
#[inline]
pub fn max_encoded_len(len: usize) -> usize {
    len.saturating_mul(138) / 100 + 1
}

/// Encodes `input` into `output` and returns the number of symbols written.
///
/// # Errors
/// - `BufferTooSmall { required }`: `output` holds fewer than `required`
///   symbols. `output` is left untouched; retrying with exactly
///   `required` bytes succeeds.
#[inline]
pub fn encode_into(input: &[u8], output: &mut [u8], alphabet: Alphabet) -> Result<usize> {
    let required = encode_to(input, output, alphabet.table());
    if required > output.len() {
        debug!(required, available = output.len(), "base58 encode buffer too small");
        return Err(Error::BufferTooSmall { required });
    }
    Ok(required)
}

/// Encodes `input` to an owned string.
#[must_use]
pub fn encode(input: &[u8], alphabet: Alphabet) -> String {
    let mut output = vec![0u8; max_encoded_len(input.len())];
    let len = encode_to(input, &mut output, alphabet.table());
    debug_assert!(len <= output.len(), "encode estimate undersized");
    output.truncate(len);
    output.into_iter().map(char::from).collect()
}

/// Returns the exact length of the full encoding, writing it to `output`
/// only when it fits. `output` is left untouched otherwise.
fn encode_to(input: &[u8], output: &mut [u8], table: &Table) -> usize {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let non_zero = &input[zeros..];

    // Low limb first, each limb big-endian within itself.
    let mut limbs: Vec<u64> = non_zero
        .rchunks(8)
        .map(|chunk| chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
        .collect();

    // Remainders, least significant first
    let mut digits = Vec::with_capacity(max_encoded_len(non_zero.len()));
    while !limbs.is_empty() {
        let mut remainder = 0u64;
        for limb in limbs.iter_mut().rev() {
            let temp = (u128::from(remainder) << 64) | u128::from(*limb);
            #[allow(clippy::cast_possible_truncation)]
            {
                *limb = (temp / 58) as u64;
                remainder = (temp % 58) as u64;
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        digits.push(table.symbol(remainder as u8));
        // Trim zero limbs at the high end
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
    }

    let required = zeros + digits.len();
    if required <= output.len() {
        output[..zeros].fill(table.symbol(0));
        for (slot, &symbol) in output[zeros..required].iter_mut().zip(digits.iter().rev()) {
            *slot = symbol;
        }
    }
    required
}
