//! Digest truncation shared by day codes and beacon code seeds
//!
//! Every 64-bit value in this crate is the first 8 bytes of a digest read as
//! a big-endian `i64`. Day codes and beacon seeds go through the same helper
//! so two implementations agree as long as they agree on the hash.

use sha2::Digest;
use zeroize::Zeroize;

use super::error::DayCodeError;

/// Number of digest bytes kept when truncating to a 64-bit value
pub const TRUNCATED_LEN: usize = 8;

/// Read the first 8 bytes of `digest` as a big-endian `i64`.
///
/// # Errors
///
/// - `DigestTooShort`: If `digest` has fewer than 8 bytes
pub fn truncate_to_i64(digest: &[u8]) -> Result<i64, DayCodeError> {
    let Some(head) = digest.first_chunk::<TRUNCATED_LEN>() else {
        return Err(DayCodeError::DigestTooShort { output_size: digest.len() });
    };

    Ok(i64::from_be_bytes(*head))
}

/// Reject hash functions whose output cannot be truncated to 64 bits.
pub fn ensure_output_size<H: Digest>() -> Result<(), DayCodeError> {
    let output_size = <H as Digest>::output_size();
    if output_size < TRUNCATED_LEN {
        return Err(DayCodeError::DigestTooShort { output_size });
    }
    Ok(())
}

/// Hash `input` once and truncate the digest.
pub fn hash_to_i64<H: Digest>(input: &[u8]) -> Result<i64, DayCodeError> {
    let mut digest = H::digest(input);
    let value = truncate_to_i64(&digest);
    digest.as_mut_slice().zeroize();
    value
}
