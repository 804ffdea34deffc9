//! Day codes: forward-secure per-day identifiers from a shared secret
//!
//! A single shared secret seeds a backward hash chain. Each day of the
//! horizon gets one 64-bit day code, and each day code yields a beacon code
//! seed through one more hash over its reversed bytes.
//!
//! # Architecture
//!
//! ```text
//! Shared Secret
//!        │
//!        ▼ H, then H repeatedly (last day first)
//! DayCodeTable[day]
//!        │
//!        ▼ reverse bytes, H
//! BeaconCodeSeed
//! ```
//!
//! # Security Properties
//!
//! - Forward Secrecy: A revealed day code gives no path to later days
//! - Determinism: Same secret and horizon always produce the same table
//! - Interoperability: Every digest is truncated to a big-endian `i64`

pub mod beacon;
pub mod calendar;
pub mod digest;
pub mod error;
pub mod table;

pub use beacon::BeaconCodeSeed;
pub use calendar::{Day, EPOCH_UNIX_SECS, SECONDS_PER_DAY, Timestamp};
pub use error::DayCodeError;
pub use table::{DayCode, DayCodeTable, MAX_HORIZON_DAYS};
