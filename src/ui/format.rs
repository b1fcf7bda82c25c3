//! Text for the watchface labels

use core::fmt::Write;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use heapless::String;

use crate::clock::ClockStyle;

/// Short date, `"07.03.24"`
pub fn date(time: &NaiveDateTime) -> String<8> {
    let mut text = String::new();
    let _ = write!(
        text,
        "{:02}.{:02}.{:02}",
        time.day(),
        time.month(),
        time.year().rem_euclid(100)
    );
    text
}

/// Date spread over three lines: weekday, month and day of month.
pub fn friendly_date(time: &NaiveDateTime) -> String<12> {
    let mut text = String::new();
    let _ = write!(
        text,
        "{}.\n{}.\n{:02}",
        weekday_abbr(time.weekday()),
        month_abbr(time.month0()),
        time.day()
    );
    text
}

/// Time of day, `"13:05"` or `"1:05"` depending on the clock style.
pub fn time_of_day(time: &NaiveDateTime, style: ClockStyle) -> String<5> {
    let mut text = String::new();
    let _ = match style {
        ClockStyle::TwentyFourHour => write!(text, "{:02}:{:02}", time.hour(), time.minute()),
        ClockStyle::TwelveHour => {
            let (_, hour) = time.hour12();
            write!(text, "{}:{:02}", hour, time.minute())
        }
    };
    text
}

/// Meridiem label for the 12 hour clock
pub fn meridiem(hour: u32) -> &'static str {
    if hour < 12 {
        "am"
    } else {
        "pm"
    }
}

/// Battery charge as shown next to the bar.
///
/// The percentage is written zero padded into a three character field,
/// below 100% the last character is a `%` sign.
pub fn battery_percent(percent: u8) -> String<3> {
    let mut digits: String<4> = String::new();
    let _ = write!(digits, "{:02}", percent);

    let mut text = String::new();
    for c in digits.chars().take(3) {
        let _ = text.push(c);
    }
    if percent < 100 {
        let _ = text.push('%');
    }
    text
}

/// Filled width of the battery bar, `max_width` at 100%.
pub fn bar_width(percent: u8, max_width: u32) -> u32 {
    percent as u32 * max_width / 100
}

fn weekday_abbr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn month_abbr(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn short_date() {
        assert_eq!(date(&at(2024, 3, 7, 0, 0)).as_str(), "07.03.24");
        assert_eq!(date(&at(2000, 12, 31, 23, 59)).as_str(), "31.12.00");
    }

    #[test]
    fn friendly_date_lines() {
        assert_eq!(friendly_date(&at(2024, 3, 7, 0, 0)).as_str(), "Thu.\nMar.\n07");
        assert_eq!(friendly_date(&at(2023, 12, 31, 0, 0)).as_str(), "Sun.\nDec.\n31");
    }

    #[test]
    fn twenty_four_hour_time() {
        let style = ClockStyle::TwentyFourHour;
        assert_eq!(time_of_day(&at(2024, 3, 7, 13, 5), style).as_str(), "13:05");
        assert_eq!(time_of_day(&at(2024, 3, 7, 0, 0), style).as_str(), "00:00");
        assert_eq!(time_of_day(&at(2024, 3, 7, 9, 30), style).as_str(), "09:30");
    }

    #[test]
    fn twelve_hour_time() {
        let style = ClockStyle::TwelveHour;
        assert_eq!(time_of_day(&at(2024, 3, 7, 13, 5), style).as_str(), "1:05");
        assert_eq!(time_of_day(&at(2024, 3, 7, 0, 7), style).as_str(), "12:07");
        assert_eq!(time_of_day(&at(2024, 3, 7, 12, 0), style).as_str(), "12:00");
        assert_eq!(time_of_day(&at(2024, 3, 7, 23, 59), style).as_str(), "11:59");
    }

    #[test]
    fn meridiem_split_at_noon() {
        assert_eq!(meridiem(0), "am");
        assert_eq!(meridiem(11), "am");
        assert_eq!(meridiem(12), "pm");
        assert_eq!(meridiem(13), "pm");
    }

    #[test]
    fn battery_labels() {
        assert_eq!(battery_percent(100).as_str(), "100");
        assert_eq!(battery_percent(45).as_str(), "45%");
        assert_eq!(battery_percent(5).as_str(), "05%");
        assert_eq!(battery_percent(0).as_str(), "00%");
    }

    #[test]
    fn battery_bar_width() {
        assert_eq!(bar_width(100, 19), 19);
        assert_eq!(bar_width(50, 19), 9);
        assert_eq!(bar_width(5, 19), 0);
        assert_eq!(bar_width(0, 19), 0);
    }
}
