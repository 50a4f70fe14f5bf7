//! Fixed clock adapter.

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::clock::Clock;

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock frozen at `2024-01-01T00:00:00Z`.
    #[must_use]
    pub fn epoch_2024() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
