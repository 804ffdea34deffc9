//! Error types for day code operations

use thiserror::Error;

/// Errors from day code table construction and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayCodeError {
    /// The resolved day falls outside `[0, horizon)`.
    ///
    /// Covers timestamps before the epoch (negative day) as well as
    /// timestamps past the precomputed horizon.
    #[error("day {day} out of range: table covers days 0..{horizon}")]
    OutOfRange {
        /// Day offset that was requested (negative before the epoch)
        day: i64,
        /// Number of days the table covers
        horizon: usize,
    },

    /// Horizon is zero or larger than `MAX_HORIZON_DAYS`
    #[error("invalid horizon: {horizon} days")]
    InvalidHorizon {
        /// Horizon that was rejected
        horizon: usize,
    },

    /// Hash output cannot be truncated to a 64-bit code
    #[error("digest too short: {output_size} bytes, need at least 8")]
    DigestTooShort {
        /// Output size of the rejected hash function
        output_size: usize,
    },
}

impl DayCodeError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors are misconfigurations caught at construction time.
    /// `OutOfRange` only means the caller asked about a day the table does
    /// not cover.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidHorizon { .. } | Self::DigestTooShort { .. } => true,
            Self::OutOfRange { .. } => false,
        }
    }
}
