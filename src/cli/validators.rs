//! CLI argument validators.
//!
//! Shared value parsers for the reporting window flags.

use crate::clock::{parse_window_date, parse_window_instant};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse a window bound (`YYYY/MM/DD HH:mm:ss`).
pub fn parse_window_time(s: &str) -> Result<NaiveDateTime, String> {
    parse_window_instant(s).map_err(|e| e.to_string())
}

/// Parse a single-night date (`YYYY/MM/DD`).
pub fn parse_night(s: &str) -> Result<NaiveDate, String> {
    parse_window_date(s).map_err(|e| e.to_string())
}
