//! Civil birth time to astronomical time.
//!
//! A local date and time-of-day in a named IANA zone is converted to UTC and
//! then to a Julian day (UT), the continuous time coordinate the ephemeris
//! works in.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use crate::error::NormalizationError;

/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AstronomicalInstant {
    julian_day: f64,
}

impl AstronomicalInstant {
    pub fn from_julian_day(julian_day: f64) -> Self {
        Self { julian_day }
    }

    /// Julian day of a UTC instant; sub-second precision is dropped.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        let hour =
            dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
        Self::from_julian_day(julian_day(dt.year(), dt.month(), dt.day(), hour))
    }

    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.julian_day - J2000) / DAYS_PER_CENTURY
    }
}

/// Gregorian calendar date plus fractional hour to Julian day.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + hour / 24.0
}

/// Convert a local birth date/time in `timezone_name` to an astronomical instant.
///
/// `time_of_day` is `HH:MM` or `HH:MM:SS`; surrounding whitespace is ignored.
pub fn normalize(
    date: &str,
    time_of_day: &str,
    timezone_name: &str,
) -> Result<AstronomicalInstant, NormalizationError> {
    let date_part = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| NormalizationError::InvalidDate(date.to_string()))?;
    let time_part = parse_time_of_day(time_of_day)?;
    let tz: Tz = timezone_name
        .parse()
        .map_err(|_| NormalizationError::UnknownTimezone(timezone_name.to_string()))?;

    let utc = local_to_utc(&tz, date_part.and_time(time_part));
    Ok(AstronomicalInstant::from_utc(utc))
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, NormalizationError> {
    let trimmed = raw.trim();
    let format = if trimmed.len() <= 5 { "%H:%M" } else { "%H:%M:%S" };
    let time = NaiveTime::parse_from_str(trimmed, format)
        .map_err(|_| NormalizationError::InvalidTime(raw.to_string()))?;
    // chrono encodes a leap second (:60) as nanosecond >= 1e9; seconds must be 0..=59
    if time.nanosecond() >= 1_000_000_000 {
        return Err(NormalizationError::InvalidTime(raw.to_string()));
    }
    Ok(time)
}

fn local_to_utc(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // DST overlap: first occurrence
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // DST gap: keep the offset that was in force before the jump.
            let before = local - Duration::days(1);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = local - Duration::seconds(offset.local_minus_utc() as i64);
            Utc.from_utc_datetime(&utc)
        }
    }
}
