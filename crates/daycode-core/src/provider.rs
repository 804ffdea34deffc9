//! Clock-bound day code provider.
//!
//! Wraps a [`DayCodeTable`] with a [`Clock`] so callers can ask for today's
//! day code or beacon seed directly, and swaps in a freshly built table when
//! the shared secret rotates.
//!
//! # Concurrency
//!
//! Readers take a snapshot (`Arc<DayCodeTable>`) under a short read lock and
//! run lookups on the snapshot without holding the lock. Rotation builds the
//! new table before taking the write lock, so the lock only guards a pointer
//! swap and readers never see a partially built table.

use std::sync::{Arc, PoisonError, RwLock};

use daycode_crypto::{BeaconCodeSeed, Day, DayCode, DayCodeError, DayCodeTable, Timestamp};

use crate::{config::DayCodeConfig, env::Clock};

/// Day code lookups against the current time.
#[derive(Debug)]
pub struct DayCodeProvider<C: Clock> {
    table: RwLock<Arc<DayCodeTable>>,
    clock: C,
}

impl<C: Clock> DayCodeProvider<C> {
    /// Build the table for `secret` and bind it to `clock`.
    ///
    /// # Errors
    ///
    /// - `InvalidHorizon`: If the configured horizon is zero or above
    ///   `MAX_HORIZON_DAYS`
    pub fn new(secret: &[u8], config: DayCodeConfig, clock: C) -> Result<Self, DayCodeError> {
        config.validate()?;
        let table = DayCodeTable::new(secret, config.horizon_days)?;

        tracing::info!(horizon_days = config.horizon_days, "day code table ready");

        Ok(Self { table: RwLock::new(Arc::new(table)), clock })
    }

    /// Snapshot of the current table.
    ///
    /// The snapshot stays valid (and unchanged) across later rotations.
    pub fn table(&self) -> Arc<DayCodeTable> {
        Arc::clone(&self.table.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Configuration the current table was built with.
    pub fn config(&self) -> DayCodeConfig {
        DayCodeConfig { horizon_days: self.table().horizon() }
    }

    /// Clock used for "today" lookups.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Day index for the current time.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If the clock is before the epoch or past the horizon
    pub fn today(&self) -> Result<Day, DayCodeError> {
        self.table().day(self.clock.now())
    }

    /// Day code for the current time.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If the clock is before the epoch or past the horizon
    pub fn current_day_code(&self) -> Result<DayCode, DayCodeError> {
        self.table().day_code(self.clock.now())
    }

    /// Beacon code seed for the current time, paired with today's index.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: If the clock is before the epoch or past the horizon
    pub fn current_beacon_seed(&self) -> Result<(BeaconCodeSeed, Day), DayCodeError> {
        self.table().beacon_seed(self.clock.now())
    }

    /// First timestamp the current table no longer covers.
    pub fn valid_until(&self) -> Timestamp {
        self.table().valid_until()
    }

    /// Replace the table with one built from a new secret, keeping the
    /// current horizon.
    ///
    /// # Errors
    ///
    /// Construction errors from [`DayCodeTable::new`]. The current table is
    /// kept.
    pub fn rotate(&self, secret: &[u8]) -> Result<(), DayCodeError> {
        self.rotate_with(secret, self.config())
    }

    /// Replace the table with one built from a new secret and configuration.
    ///
    /// The new table is fully built before it becomes visible. On error the
    /// current table is kept.
    ///
    /// # Errors
    ///
    /// - `InvalidHorizon`: If `config` fails validation
    pub fn rotate_with(&self, secret: &[u8], config: DayCodeConfig) -> Result<(), DayCodeError> {
        let table = config
            .validate()
            .and_then(|()| DayCodeTable::new(secret, config.horizon_days))
            .inspect_err(|e| {
                tracing::warn!(error = %e, "day code table rotation failed; keeping current table");
            })?;

        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(table);

        tracing::info!(horizon_days = config.horizon_days, "day code table rotated");
        Ok(())
    }
}
