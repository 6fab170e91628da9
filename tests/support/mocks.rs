// tests/support/mocks.rs
use chrono::{DateTime, TimeZone, Utc};
use inscription_core::application::ports::time::Clock;

/// Deterministic clock so age checks do not depend on the wall clock.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// 2025-06-15T12:00:00Z, the reference instant used across the tests.
    pub fn default_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Self::default_instant())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
