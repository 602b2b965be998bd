//! Nullable clock: deterministic time for testing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rxr_intake::Clock;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<NaiveDateTime>,
}

impl NullClock {
    pub fn new(initial: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// Start at a calendar date and wall-clock time.
    ///
    /// # Panics
    /// Panics if the date or time is out of range.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let initial = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .expect("valid date and time");
        Self::new(initial)
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: i64) {
        self.current.set(self.current.get() + Duration::seconds(secs));
    }

    /// Set the time to a specific value.
    pub fn set(&self, at: NaiveDateTime) {
        self.current.set(at);
    }
}

impl Clock for NullClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}
