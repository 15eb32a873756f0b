//! Time sources for TTL arithmetic.
//!
//! Production code passes [`SystemClock`]. Tests pass [`FixedClock`] so
//! that expiry values computed from a TTL are deterministic.

use crate::temporal::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current UTC time, truncated to seconds.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The instant returned by every call to [`Clock::now`].
    pub at: Timestamp,
}

impl FixedClock {
    /// Creates a clock that always reports `at`.
    pub const fn new(at: Timestamp) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }
}
