//! Day Code Cryptographic Primitives
//!
//! Derivation and lookup engine for forward-secure day codes. Pure functions
//! with deterministic outputs. Callers provide the shared secret and the
//! timestamp, so nothing here touches the system clock.
//!
//! # Key Lifecycle
//!
//! The shared secret is established once at registration. From it, a table
//! covering a fixed horizon of days is built eagerly; each day's code is
//! looked up by the day index of a timestamp, and the beacon code seed for
//! that day is derived on demand.
//!
//! ```text
//! Shared Secret
//!        │
//!        ▼
//! Hash Chain → Day Codes (one per day, last day nearest the secret)
//!        │
//!        ▼
//! Byte Reversal + Hash → Beacon Code Seed (per day, on demand)
//! ```
//!
//! # Security
//!
//! Forward Secrecy:
//! - Day `i` is one hash *further* from the secret than day `i + 1`
//! - Learning the code for today reveals nothing about tomorrow
//! - Intermediate chain digests are zeroized during construction
//!
//! Domain Separation:
//! - Beacon seeds hash the reversed day code bytes, never the chain digest
//! - A seed input never equals a chain input for the same value
//!
//! Interoperability:
//! - Epoch is fixed at 2020-01-01T00:00:00Z
//! - Digest truncation reads the first 8 bytes as a big-endian `i64`

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod day_code;

pub use day_code::{
    BeaconCodeSeed, Day, DayCode, DayCodeError, DayCodeTable, EPOCH_UNIX_SECS, MAX_HORIZON_DAYS,
    SECONDS_PER_DAY, Timestamp,
};
