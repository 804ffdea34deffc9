//! Day code configuration

use daycode_crypto::{DayCodeError, MAX_HORIZON_DAYS};
use serde::{Deserialize, Serialize};

/// Default horizon: five years of days
pub const DEFAULT_HORIZON_DAYS: usize = 365 * 5;

/// Configuration for building day code tables.
///
/// The epoch is fixed by the protocol and deliberately not part of this
/// struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCodeConfig {
    /// Number of days each table covers, starting at the epoch
    pub horizon_days: usize,
}

impl DayCodeConfig {
    /// Check the configuration before building a table.
    ///
    /// # Errors
    ///
    /// - `InvalidHorizon`: If `horizon_days` is zero or above
    ///   [`MAX_HORIZON_DAYS`]
    pub fn validate(&self) -> Result<(), DayCodeError> {
        if self.horizon_days == 0 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(DayCodeError::InvalidHorizon { horizon: self.horizon_days });
        }
        Ok(())
    }
}

impl Default for DayCodeConfig {
    fn default() -> Self {
        Self { horizon_days: DEFAULT_HORIZON_DAYS }
    }
}
