//! Display formatting for the screen's wall clock.

use chrono::{Datelike, Timelike, Weekday};

/// Formats a date as `YYYY/M/D/WeekdayName` (month and day unpadded).
///
/// # Examples
///
/// ```
/// use aikata_domain::common::format_display_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
/// assert_eq!(format_display_date(&date), "2026/8/29/Saturday");
/// ```
pub fn format_display_date(date: &impl Datelike) -> String {
    let weekday = match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    };
    format!("{}/{}/{}/{}", date.year(), date.month(), date.day(), weekday)
}

/// Formats a time as zero-padded `HH:MM:SS`.
pub fn format_display_time(time: &impl Timelike) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}
