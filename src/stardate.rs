//! Stardate calculation
//!
//! One year is taken as 1000 stardates, counted linearly from 01/01/2000.
//! The arithmetic runs in the same mix of single and double precision as
//! the LCARS watchfaces this face mimics, so the digits shown match theirs.
//!
//! Known limitations, kept as is:
//! - the leap day correction only kicks in /after/ a leap year is over,
//!   so every leap year is one day short until December 31st,
//! - years are two-digit, the formula does not work past 2099.

use core::fmt::{self, Write};

use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::String;

/// Length of the rendered stardate, `"00000.00"`.
pub const LABEL_LEN: usize = 8;

/// Mean tropical year in days.
const TROPICAL_YEAR: f64 = 365.242196;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    YearOutOfRange,
    DayOutOfRange,
    HourOutOfRange,
    MinuteOutOfRange,
}

/// A point in time on the stardate scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stardate {
    value: f32,
}

impl Stardate {
    /// Calculate the stardate for a two-digit year (0–99), the day of
    /// that year (1–366) and the time of day.
    pub fn new(year: u8, day_of_year: u16, hour: u8, minute: u8) -> Result<Self, Error> {
        if year > 99 {
            return Err(Error::YearOutOfRange);
        }
        if !(1..=366).contains(&day_of_year) {
            return Err(Error::DayOutOfRange);
        }
        if hour > 23 {
            return Err(Error::HourOutOfRange);
        }
        if minute > 59 {
            return Err(Error::MinuteOutOfRange);
        }

        Ok(Self::compute(
            year as i32,
            day_of_year as i32,
            hour as i32,
            minute as i32,
        ))
    }

    /// Stardate of a wall-clock time. The year is reduced to two digits.
    pub fn from_datetime(time: &NaiveDateTime) -> Self {
        Self::compute(
            time.year().rem_euclid(100),
            time.ordinal() as i32,
            time.hour() as i32,
            time.minute() as i32,
        )
    }

    fn compute(year: i32, day_of_year: i32, hour: i32, minute: i32) -> Self {
        // Days since 01/01/2000 before this year. Integer division truncates
        // towards zero, so year 00 gets no correction at all.
        let year_offset = (year * 365 + (year - 1) / 4) as f32;
        // Decimal days into this year
        let decimal_days =
            (((minute as f64 / 60.0) + hour as f64) / 24.0 + day_of_year as f64 - 1.0) as f32;

        let value = ((year_offset + decimal_days) as f64 * (1000.0 / TROPICAL_YEAR)) as f32;

        Self { value }
    }

    /// Raw stardate value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whole stardates
    pub fn whole(&self) -> i32 {
        self.value as i32
    }

    /// Thousandths of a stardate (0–999)
    pub fn fraction(&self) -> i32 {
        (self.value * 1000.0) as i32 % 1000
    }

    /// Text shown on the watchface.
    ///
    /// The fraction is printed with a two wide field into an eight character
    /// buffer: three digit fractions lose their last digit, single digits are
    /// padded with a space (`"00000. 1"`).
    pub fn label(&self) -> String<LABEL_LEN> {
        let mut full: String<16> = String::new();
        // Cannot overflow: at most 11 digits, a dot and a sign per field.
        let _ = write!(full, "{}", self);

        let mut label = String::new();
        for c in full.chars().take(LABEL_LEN) {
            let _ = label.push(c);
        }
        label
    }
}

impl fmt::Display for Stardate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}.{:2}", self.whole(), self.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn golden_2016_new_year() {
        let stardate = Stardate::new(16, 1, 0, 0).unwrap();

        assert_eq!(stardate.value(), 15997.603515625);
        assert_eq!(stardate.whole(), 15997);
        assert_eq!(stardate.fraction(), 604);
        assert_eq!(stardate.label().as_str(), "15997.60");
        assert_eq!(std::format!("{}", stardate), "15997.604");
    }

    #[test]
    fn epoch_start_is_zero() {
        let stardate = Stardate::new(0, 1, 0, 0).unwrap();

        assert_eq!(stardate.whole(), 0);
        assert_eq!(stardate.fraction(), 0);
        assert_eq!(stardate.label().as_str(), "00000. 0");
    }

    #[test]
    fn short_fraction_is_space_padded() {
        assert_eq!(Stardate::new(0, 1, 0, 1).unwrap().label().as_str(), "00000. 1");
        assert_eq!(Stardate::new(0, 366, 23, 59).unwrap().label().as_str(), "01002.72");
    }

    #[test]
    fn known_values() {
        assert_eq!(Stardate::new(1, 1, 0, 0).unwrap().label().as_str(), "00999.33");
        assert_eq!(Stardate::new(24, 67, 13, 5).unwrap().label().as_str(), "24179.96");
        assert_eq!(Stardate::new(26, 291, 12, 0).unwrap().label().as_str(), "26794.54");
        assert_eq!(Stardate::new(99, 365, 23, 59).unwrap().label().as_str(), "99999.40");
    }

    #[test]
    fn from_datetime_uses_two_digit_year() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(13, 5, 42)
            .unwrap();

        assert_eq!(
            Stardate::from_datetime(&time),
            Stardate::new(24, 67, 13, 5).unwrap()
        );

        // Past the century the two digit year wraps around
        let time = NaiveDate::from_ymd_opt(2116, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Stardate::from_datetime(&time).whole(), 15997);
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert_eq!(Stardate::new(100, 1, 0, 0), Err(Error::YearOutOfRange));
        assert_eq!(Stardate::new(16, 0, 0, 0), Err(Error::DayOutOfRange));
        assert_eq!(Stardate::new(16, 367, 0, 0), Err(Error::DayOutOfRange));
        assert_eq!(Stardate::new(16, 1, 24, 0), Err(Error::HourOutOfRange));
        assert_eq!(Stardate::new(16, 1, 0, 60), Err(Error::MinuteOutOfRange));
    }

    #[test]
    fn whole_part_never_decreases_within_a_year() {
        for year in [0u8, 1, 16, 23, 24, 50, 99] {
            let mut previous = 0;
            for day in 1..=365u16 {
                for hour in 0..24u8 {
                    for minute in [0u8, 15, 30, 45, 59] {
                        let whole = Stardate::new(year, day, hour, minute).unwrap().whole();
                        assert!(whole >= 0);
                        assert!(
                            whole >= previous,
                            "year {} day {} {}:{} went back to {}",
                            year,
                            day,
                            hour,
                            minute,
                            whole
                        );
                        previous = whole;
                    }
                }
            }
        }
    }
}
