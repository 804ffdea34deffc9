//! Beacon code seed derivation from a day code

use std::fmt;

use sha2::Digest;

use super::{digest::hash_to_i64, error::DayCodeError, table::DayCode};

/// Per-day seed for generating short-range broadcast identifiers.
///
/// Computed on demand from a [`DayCode`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeaconCodeSeed(i64);

impl BeaconCodeSeed {
    /// Derive the seed for `code`.
    ///
    /// The day code's big-endian bytes are reversed before hashing so the
    /// input never coincides with a day code chain input for the same value.
    ///
    /// # Errors
    ///
    /// - `DigestTooShort`: If `H` produces fewer than 8 bytes
    pub fn derive<H: Digest>(code: DayCode) -> Result<Self, DayCodeError> {
        hash_to_i64::<H>(&reversed_input(code)).map(Self)
    }

    /// Signed 64-bit seed value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BeaconCodeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hash input for the seed: the code's big-endian bytes, reversed.
fn reversed_input(code: DayCode) -> [u8; 8] {
    let mut bytes = code.to_be_bytes();
    bytes.reverse();
    bytes
}

#[cfg(test)]
mod tests {
    use sha2::Sha256;

    use super::*;

    #[test]
    fn input_is_reversed_byte_sequence() {
        let code = DayCode::new(0x0102_0304_0506_0708);
        assert_eq!(reversed_input(code), [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn seed_hashes_reversed_bytes() {
        let code = DayCode::new(0x0102_0304_0506_0708);

        let reversed = Sha256::digest([0x08u8, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        let forward = Sha256::digest([0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        let expected = i64::from_be_bytes(reversed[..8].try_into().unwrap());
        let unexpected = i64::from_be_bytes(forward[..8].try_into().unwrap());

        let seed = BeaconCodeSeed::derive::<Sha256>(code).unwrap();
        assert_eq!(seed.value(), expected);
        assert_ne!(seed.value(), unexpected);
    }

    #[test]
    fn seed_is_deterministic() {
        let code = DayCode::new(-42);
        assert_eq!(
            BeaconCodeSeed::derive::<Sha256>(code).unwrap(),
            BeaconCodeSeed::derive::<Sha256>(code).unwrap()
        );
    }

    #[test]
    fn palindromic_code_still_hashes() {
        // Reversal is a no-op here; the seed is just the hash of the bytes
        let code = DayCode::new(0x0102_0304_0403_0201);
        let digest = Sha256::digest(code.to_be_bytes());
        let expected = i64::from_be_bytes(digest[..8].try_into().unwrap());

        assert_eq!(BeaconCodeSeed::derive::<Sha256>(code).unwrap().value(), expected);
    }
}
