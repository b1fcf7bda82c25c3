//! Time keeping module for PineTime

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use embassy_time::Instant;

// Current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

pub struct TimeManager {
    /// Clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
    /// Offset from UTC in seconds
    offset: i32,
}

impl TimeManager {
    /// Initialize time measurement on boot from the build time
    pub fn init(offset: i32) -> Self {
        let time = DateTime::from_timestamp(UTC_EPOCH, 0)
            .map(|t| t.naive_utc())
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);

        Self {
            time,
            instant: Instant::now(),
            offset,
        }
    }

    /// Current UTC time
    pub fn utc(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.instant).as_micros() as i64;
        self.time + TimeDelta::microseconds(elapsed)
    }

    /// Current local time
    pub fn local_time(&self) -> NaiveDateTime {
        self.utc() + TimeDelta::seconds(self.offset as i64)
    }
}
