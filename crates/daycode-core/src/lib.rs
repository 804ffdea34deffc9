//! Day code runtime glue.
//!
//! Binds the pure derivation engine in [`daycode_crypto`] to a wall clock and
//! to a configuration, and handles replacing the table when the shared
//! secret changes.
//!
//! # Components
//!
//! - [`Clock`]: Wall-clock abstraction ([`SystemClock`] in production,
//!   [`FixedClock`] in tests)
//! - [`DayCodeConfig`]: Table horizon, with a five-year default
//! - [`DayCodeProvider`]: "Today" lookups and atomic table rotation
//!
//! # Example
//!
//! ```
//! use daycode_core::{DayCodeConfig, DayCodeProvider, FixedClock};
//! use daycode_crypto::{Day, Timestamp};
//!
//! let clock = FixedClock::new(Timestamp::EPOCH);
//! let provider = DayCodeProvider::new(b"shared secret", DayCodeConfig::default(), clock)?;
//!
//! let (_seed, day) = provider.current_beacon_seed()?;
//! assert_eq!(day, Day::new(0));
//! # Ok::<(), daycode_crypto::DayCodeError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod env;
pub mod provider;

pub use config::{DEFAULT_HORIZON_DAYS, DayCodeConfig};
pub use env::{Clock, FixedClock, SystemClock};
pub use provider::DayCodeProvider;
