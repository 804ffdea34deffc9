//! Fuzz target for day code table construction and lookup
//!
//! Tests the hash chain and timestamp mapping under adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary shared secrets (empty, small, large)
//! - Horizons from a single day up to a few years
//! - Timestamps around the epoch, around the horizon end, and at i64 extremes
//!
//! # Invariants
//!
//! - Construction is deterministic (same inputs → same table)
//! - Last day is the truncated hash of the secret
//! - Each day is the truncated hash of the following day's digest
//! - Lookups never panic; in-range timestamps resolve, others are OutOfRange
//! - Beacon seed equals the hash of the reversed day code bytes

#![no_main]

use arbitrary::Arbitrary;
use daycode_crypto::{
    Day, DayCodeError, DayCodeTable, Timestamp, EPOCH_UNIX_SECS, SECONDS_PER_DAY,
};
use libfuzzer_sys::fuzz_target;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Arbitrary)]
struct DayCodeScenario {
    /// Shared secret (variable length)
    secret: SharedSecret,
    /// Horizon in days (clamped to a small range)
    horizon: u16,
    /// Lookups to perform
    lookups: Vec<Lookup>,
}

#[derive(Debug, Clone, Arbitrary)]
enum SharedSecret {
    Empty,
    Small([u8; 8]),
    Normal([u8; 32]),
    Large([u8; 64]),
    Arbitrary(Vec<u8>),
}

impl SharedSecret {
    fn as_bytes(&self) -> &[u8] {
        match self {
            SharedSecret::Empty => &[],
            SharedSecret::Small(b) => b,
            SharedSecret::Normal(b) => b,
            SharedSecret::Large(b) => b,
            SharedSecret::Arbitrary(b) => b,
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
enum Lookup {
    /// Seconds relative to the epoch
    FromEpoch(i32),
    /// Seconds relative to the end of the horizon
    FromHorizonEnd(i32),
    /// Raw Unix seconds
    Raw(i64),
}

fn truncate(digest: &[u8]) -> i64 {
    i64::from_be_bytes(digest[..8].try_into().unwrap())
}

fuzz_target!(|scenario: DayCodeScenario| {
    let secret = scenario.secret.as_bytes();
    let horizon = usize::from(scenario.horizon % 1024);

    // INVARIANT 1: Zero horizon is rejected, never panics
    let table = match DayCodeTable::new(secret, horizon) {
        Ok(table) => table,
        Err(err) => {
            assert_eq!(horizon, 0, "only a zero horizon may fail");
            assert_eq!(err, DayCodeError::InvalidHorizon { horizon: 0 });
            return;
        },
    };
    assert_eq!(table.horizon(), horizon);

    // INVARIANT 2: Construction is deterministic
    let again = DayCodeTable::new(secret, horizon).unwrap();
    assert!(table.iter().eq(again.iter()), "construction must be deterministic");

    // INVARIANT 3: Chain runs backward from the secret
    let mut digest = Sha256::digest(secret);
    for index in (0..horizon).rev() {
        let code = table.code_for_day(Day::new(index)).unwrap();
        assert_eq!(code.value(), truncate(&digest), "day {index} breaks the chain");
        digest = Sha256::digest(digest);
    }

    let end = EPOCH_UNIX_SECS + horizon as i64 * SECONDS_PER_DAY;

    for lookup in scenario.lookups {
        let secs = match lookup {
            Lookup::FromEpoch(offset) => EPOCH_UNIX_SECS + i64::from(offset),
            Lookup::FromHorizonEnd(offset) => end + i64::from(offset),
            Lookup::Raw(secs) => secs,
        };
        let at = Timestamp::from_unix_secs(secs);

        // INVARIANT 4: Range is exactly [epoch, end)
        let in_range = (EPOCH_UNIX_SECS..end).contains(&secs);
        match table.beacon_seed(at) {
            Ok((seed, day)) => {
                assert!(in_range, "{secs} resolved outside the horizon");
                assert_eq!(day.index() as i64, (secs - EPOCH_UNIX_SECS) / SECONDS_PER_DAY);

                // INVARIANT 5: Seed hashes the reversed day code bytes
                let code = table.day_code(at).unwrap();
                let mut reversed = code.to_be_bytes();
                reversed.reverse();
                assert_eq!(seed.value(), truncate(&Sha256::digest(reversed)));
            },
            Err(DayCodeError::OutOfRange { .. }) => {
                assert!(!in_range, "{secs} rejected inside the horizon");
            },
            Err(err) => unreachable!("unexpected error: {err}"),
        }
    }
});
