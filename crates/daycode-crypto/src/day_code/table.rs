//! Precomputed day code table
//!
//! # Construction Order
//!
//! ```text
//! secret ──H──▶ d[N-1] ──H──▶ d[N-2] ──H──▶ ... ──H──▶ d[0]
//!                 │             │                        │
//!             values[N-1]   values[N-2]              values[0]
//! ```
//!
//! Days are consumed from day 0 forward while the chain runs backward from
//! the secret. Revealing `values[i]` exposes a digest whose preimage is the
//! digest for day `i + 1`, so later days stay out of reach of anyone
//! without the secret.

use std::{fmt, marker::PhantomData};

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::{
    beacon::BeaconCodeSeed,
    calendar::{self, Day, Timestamp},
    digest::{ensure_output_size, truncate_to_i64},
    error::DayCodeError,
};

/// Largest horizon a table may cover: one hundred years of days.
pub const MAX_HORIZON_DAYS: usize = 365 * 100;

/// Identifier for a single day, truncated from the hash chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCode(i64);

impl DayCode {
    /// Wrap a raw 64-bit code.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Signed 64-bit code value.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Big-endian byte representation.
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Forward-secure sequence of day codes covering a fixed horizon.
///
/// Built once from the shared secret, immutable afterwards. Lookups are
/// O(1); beacon seeds cost one extra hash.
///
/// # Security
///
/// - The secret is only borrowed during construction and never stored
/// - Chain digests are zeroized as soon as the next one is computed
/// - Table contents are zeroized on drop and hidden from `Debug`
pub struct DayCodeTable<H = Sha256> {
    values: Vec<i64>,
    _hash: PhantomData<fn() -> H>,
}

impl DayCodeTable<Sha256> {
    /// Build a SHA-256 table covering `horizon` days.
    ///
    /// # Errors
    ///
    /// - `InvalidHorizon`: If `horizon` is zero or above [`MAX_HORIZON_DAYS`]
    pub fn new(secret: &[u8], horizon: usize) -> Result<Self, DayCodeError> {
        Self::with_hash(secret, horizon)
    }
}

impl<H: Digest> DayCodeTable<H> {
    /// Build a table covering `horizon` days using hash `H`.
    ///
    /// Performs exactly `horizon` sequential hash calls.
    ///
    /// # Errors
    ///
    /// - `InvalidHorizon`: If `horizon` is zero or above [`MAX_HORIZON_DAYS`]
    /// - `DigestTooShort`: If `H` produces fewer than 8 bytes
    pub fn with_hash(secret: &[u8], horizon: usize) -> Result<Self, DayCodeError> {
        if horizon == 0 || horizon > MAX_HORIZON_DAYS {
            return Err(DayCodeError::InvalidHorizon { horizon });
        }
        ensure_output_size::<H>()?;

        let mut values = vec![0i64; horizon];
        let last = horizon - 1;

        let mut digest = H::digest(secret);
        values[last] = truncate_to_i64(&digest)?;

        for day in (0..last).rev() {
            let next = H::digest(digest.as_slice());
            digest.as_mut_slice().zeroize();
            digest = next;
            values[day] = truncate_to_i64(&digest)?;
        }
        digest.as_mut_slice().zeroize();

        tracing::debug!(horizon, "built day code table");

        Ok(Self { values, _hash: PhantomData })
    }

    /// Number of days covered.
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// First timestamp past the end of the table.
    pub fn valid_until(&self) -> Timestamp {
        calendar::day_start(Day::new(self.horizon()))
    }

    /// Resolve the day `at` falls on.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If `at` is before the epoch or past the horizon
    pub fn day(&self, at: Timestamp) -> Result<Day, DayCodeError> {
        calendar::day_for(at, self.horizon()).inspect_err(|e| {
            tracing::error!(timestamp = %at, error = %e, "timestamp outside day code table");
        })
    }

    /// Day code for the day `at` falls on.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If `at` is before the epoch or past the horizon
    pub fn day_code(&self, at: Timestamp) -> Result<DayCode, DayCodeError> {
        let day = self.day(at)?;
        self.lookup(day)
    }

    /// Day code for a day index.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If `day` is past the horizon
    pub fn code_for_day(&self, day: Day) -> Result<DayCode, DayCodeError> {
        self.lookup(day).inspect_err(|e| {
            tracing::error!(%day, error = %e, "day outside day code table");
        })
    }

    /// Beacon code seed for the day `at` falls on, paired with that day.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If `at` is before the epoch or past the horizon
    pub fn beacon_seed(&self, at: Timestamp) -> Result<(BeaconCodeSeed, Day), DayCodeError> {
        let day = self.day(at)?;
        let code = self.lookup(day)?;
        let seed = BeaconCodeSeed::derive::<H>(code)?;
        Ok((seed, day))
    }

    /// Beacon code seed for a day index.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If `day` is past the horizon
    pub fn beacon_seed_for_day(&self, day: Day) -> Result<BeaconCodeSeed, DayCodeError> {
        BeaconCodeSeed::derive::<H>(self.code_for_day(day)?)
    }

    /// All day codes in day order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Day, DayCode)> + '_ {
        self.values.iter().enumerate().map(|(index, &value)| (Day::new(index), DayCode(value)))
    }

    fn lookup(&self, day: Day) -> Result<DayCode, DayCodeError> {
        self.values.get(day.index()).copied().map(DayCode).ok_or(DayCodeError::OutOfRange {
            day: i64::try_from(day.index()).unwrap_or(i64::MAX),
            horizon: self.horizon(),
        })
    }
}

impl<H> fmt::Debug for DayCodeTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayCodeTable").field("horizon", &self.values.len()).finish_non_exhaustive()
    }
}

impl<H> Drop for DayCodeTable<H> {
    fn drop(&mut self) {
        self.values.zeroize();
    }
}
