//! Optional reporting window.

use crate::constants::formats::WINDOW_INSTANT;
use crate::constants::window::NIGHT_BOUNDARY_HOUR;
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

/// Half-open `[start, stop)` filter over detection instants.
///
/// Either bound may be absent; an absent bound does not clip. Windows built
/// from the command line always carry both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    start: Option<NaiveDateTime>,
    stop: Option<NaiveDateTime>,
}

impl Window {
    /// Create a window with both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowReversed`] if `stop` precedes `start`.
    pub fn new(start: NaiveDateTime, stop: NaiveDateTime) -> Result<Self> {
        if stop < start {
            return Err(Error::WindowReversed { start, stop });
        }
        Ok(Self {
            start: Some(start),
            stop: Some(stop),
        })
    }

    /// Window that only narrows the start.
    pub fn starting(start: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            stop: None,
        }
    }

    /// Window that only narrows the end.
    pub fn ending(stop: NaiveDateTime) -> Self {
        Self {
            start: None,
            stop: Some(stop),
        }
    }

    /// Noon-to-noon window covering the night that begins on `date`.
    pub fn for_night(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(NIGHT_BOUNDARY_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
        let start = date.and_time(noon);
        Self {
            start: Some(start),
            stop: Some(start + TimeDelta::days(1)),
        }
    }

    /// Window start, if any.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Window stop, if any.
    pub fn stop(&self) -> Option<NaiveDateTime> {
        self.stop
    }

    /// Whether `instant` falls inside the window.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| instant >= start) && self.stop.is_none_or(|stop| instant < stop)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<NaiveDateTime>| {
            b.map_or_else(|| "open".to_string(), |b| b.format(WINDOW_INSTANT).to_string())
        };
        write!(f, "{} to {}", bound(self.start), bound(self.stop))
    }
}
