//! Time source for presenting records.

use chrono::Utc;

use crate::types::Timestamp;

/// Supplies the "now" that history timestamps are measured against.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn fixed_clock_does_not_advance() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_tracks_wall_time() {
        let before = Utc::now();
        let reading = SystemClock.now();
        assert!(reading >= before);
        assert!(reading - before < Duration::seconds(5));
    }
}
