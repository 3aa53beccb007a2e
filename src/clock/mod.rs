//! Wall-clock primitives shared by the bucketing engine.
//!
//! All instants are station-local `NaiveDateTime`s; no timezone conversion
//! happens anywhere in the crate.

mod window;

pub use window::Window;

use crate::constants::formats;
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// True when both instants fall in the same clock hour of the same day.
pub fn same_hour(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date() && a.hour() == b.hour()
}

/// True when both instants fall on the same calendar day.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Truncate an instant to the top of its hour.
pub fn top_of_hour(instant: NaiveDateTime) -> NaiveDateTime {
    let past_hour = i64::from(instant.minute() * 60 + instant.second());
    instant - TimeDelta::seconds(past_hour) - TimeDelta::nanoseconds(i64::from(instant.nanosecond()))
}

/// Parse a session date (`MM/DD/YY`).
pub fn parse_session_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), formats::SESSION_DATE).map_err(|_| Error::Parse {
        value: value.to_string(),
        expected: "a date (MM/DD/YY)",
    })
}

/// Parse a time of day (`HH:mm:ss`).
pub fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), formats::CLOCK_TIME).map_err(|_| Error::Parse {
        value: value.to_string(),
        expected: "a time of day (HH:mm:ss)",
    })
}

/// Parse a detection instant (`MM/DD/YY HH:mm:ss`).
pub fn parse_detection_instant(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), formats::DETECTION_INSTANT).map_err(|_| {
        Error::Parse {
            value: value.to_string(),
            expected: "a detection time (MM/DD/YY HH:mm:ss)",
        }
    })
}

/// Parse a recording length (`H:mm:ss`, hours may exceed 23).
pub fn parse_recording_length(value: &str) -> Result<TimeDelta> {
    let invalid = || Error::Parse {
        value: value.to_string(),
        expected: "a duration (H:mm:ss)",
    };

    let parts: Vec<&str> = value.trim().split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(invalid());
    }

    hours
        .checked_mul(3600)
        .and_then(|secs| secs.checked_add(minutes * 60 + seconds))
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(invalid)
}

/// Parse a window instant (`YYYY/MM/DD HH:mm:ss`, seconds optional).
pub fn parse_window_instant(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, formats::WINDOW_INSTANT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, formats::WINDOW_INSTANT_SHORT))
        .map_err(|_| Error::Parse {
            value: value.to_string(),
            expected: "a window time (YYYY/MM/DD HH:mm:ss)",
        })
}

/// Parse a single-night date (`YYYY/MM/DD`).
pub fn parse_window_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), formats::WINDOW_DATE).map_err(|_| Error::Parse {
        value: value.to_string(),
        expected: "a date (YYYY/MM/DD)",
    })
}
