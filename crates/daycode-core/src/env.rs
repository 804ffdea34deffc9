//! Clock abstraction for deterministic testing.
//!
//! Decouples day code lookups from the system clock. Production code uses
//! [`SystemClock`]; tests pin time with [`FixedClock`] so "today" is
//! reproducible.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use daycode_crypto::Timestamp;

/// Abstract wall-clock source.
///
/// # Invariants
///
/// - `now()` is infallible
/// - Returned timestamps are whole Unix seconds (sub-second parts floored)
pub trait Clock: Clone + Send + Sync + 'static {
    /// Current wall-clock time.
    fn now(&self) -> Timestamp;
}

/// Production clock reading `SystemTime::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[allow(clippy::disallowed_methods)]
    fn now(&self) -> Timestamp {
        Timestamp::from(std::time::SystemTime::now())
    }
}

/// Manually driven clock.
///
/// Clones share the same instant, so a test can hold one handle and advance
/// time seen by a provider that owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    secs: Arc<AtomicI64>,
}

impl FixedClock {
    /// Create a clock stopped at `at`.
    pub fn new(at: Timestamp) -> Self {
        Self { secs: Arc::new(AtomicI64::new(at.unix_secs())) }
    }

    /// Move the clock to `at`.
    pub fn set(&self, at: Timestamp) {
        self.secs.store(at.unix_secs(), Ordering::SeqCst);
    }

    /// Move the clock forward (or backward, for negative `secs`).
    pub fn advance_secs(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix_secs(self.secs.load(Ordering::SeqCst))
    }
}
