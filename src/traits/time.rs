//! Time provider abstraction for testable time-dependent code.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate};

/// Trait for providing the current time.
///
/// This abstraction allows code that depends on the current time to be
/// tested with deterministic, controllable time values. Listing
/// availability rules work on civil dates, so the trait exposes a UTC
/// calendar date alongside the raw timestamp.
pub trait TimeProvider: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now_unix(&self) -> u64;

    /// Returns the current UTC calendar date.
    fn today_utc(&self) -> NaiveDate {
        DateTime::from_timestamp(self.now_unix() as i64, 0)
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

/// Production implementation that uses the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl SystemTimeProvider {
    pub const fn new() -> Self {
        Self
    }
}
