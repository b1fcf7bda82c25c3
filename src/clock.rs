//! Wall-clock helpers shared by the tick timer and the watchface

use core::ops::{BitOr, BitOrAssign};

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Bitmask of the calendar units that changed since the previous tick.
///
/// The bits are ordered from fine to coarse, so "day or coarser" is a
/// plain numeric comparison against [`TimeUnits::DAY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: Self = Self(0);
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const MONTH: Self = Self(1 << 4);
    pub const YEAR: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b11_1111);

    /// Raw bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether all units in `other` are set
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the change reaches the date, i.e. a day, month or year rolled over.
    pub fn spans_day(self) -> bool {
        self >= Self::DAY
    }
}

impl BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Determine which units changed between two ticks.
///
/// Without a previous tick everything counts as changed.
pub fn changed_units(previous: Option<&NaiveDateTime>, now: &NaiveDateTime) -> TimeUnits {
    let Some(previous) = previous else {
        return TimeUnits::ALL;
    };

    let mut units = TimeUnits::NONE;
    if previous.second() != now.second() {
        units |= TimeUnits::SECOND;
    }
    if previous.minute() != now.minute() {
        units |= TimeUnits::MINUTE;
    }
    if previous.hour() != now.hour() {
        units |= TimeUnits::HOUR;
    }
    if previous.date() != now.date() {
        units |= TimeUnits::DAY;
    }
    if previous.month() != now.month() || previous.year() != now.year() {
        units |= TimeUnits::MONTH;
    }
    if previous.year() != now.year() {
        units |= TimeUnits::YEAR;
    }
    units
}

/// How the time of day is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// `13:05`
    #[default]
    TwentyFourHour,
    /// `1:05` plus an am/pm label
    TwelveHour,
}

impl ClockStyle {
    /// Style selected at build time through the `clock-12h` feature
    pub const fn configured() -> Self {
        if cfg!(feature = "clock-12h") {
            Self::TwelveHour
        } else {
            Self::TwentyFourHour
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn first_tick_changes_everything() {
        let units = changed_units(None, &at(2024, 3, 7, 13, 5, 0));

        assert_eq!(units, TimeUnits::ALL);
        assert!(units.spans_day());
    }

    #[test]
    fn minute_tick() {
        let units = changed_units(Some(&at(2024, 3, 7, 13, 4, 0)), &at(2024, 3, 7, 13, 5, 0));

        assert_eq!(units, TimeUnits::MINUTE);
        assert!(!units.spans_day());
    }

    #[test]
    fn hour_tick_stays_below_day() {
        let units = changed_units(Some(&at(2024, 3, 7, 13, 59, 0)), &at(2024, 3, 7, 14, 0, 0));

        assert_eq!(units, TimeUnits::MINUTE | TimeUnits::HOUR);
        assert!(!units.spans_day());
    }

    #[test]
    fn new_year_rolls_every_coarse_unit() {
        let units = changed_units(
            Some(&at(2023, 12, 31, 23, 59, 0)),
            &at(2024, 1, 1, 0, 0, 0),
        );

        assert!(units.contains(TimeUnits::DAY | TimeUnits::MONTH | TimeUnits::YEAR));
        assert!(!units.contains(TimeUnits::SECOND));
        assert!(units.spans_day());
    }

    #[test]
    fn day_alone_spans_day() {
        assert!(TimeUnits::DAY.spans_day());
        assert!(TimeUnits::YEAR.spans_day());
        assert!(!(TimeUnits::SECOND | TimeUnits::MINUTE | TimeUnits::HOUR).spans_day());
    }

    #[test]
    fn default_style_is_24h() {
        assert_eq!(ClockStyle::default(), ClockStyle::TwentyFourHour);
    }
}
