//! Reporting window resolution.

use crate::clock::Window;
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Build the reporting window from command-line bounds.
///
/// A single-night `date` wins and expands to noon-to-noon. Otherwise both
/// `start` and `stop` must be given together, with `stop` not before
/// `start`. No bounds at all means no window.
pub fn build_window(
    start: Option<NaiveDateTime>,
    stop: Option<NaiveDateTime>,
    date: Option<NaiveDate>,
) -> Result<Option<Window>> {
    if let Some(date) = date {
        return Ok(Some(Window::for_night(date)));
    }

    match (start, stop) {
        (Some(start), Some(stop)) => Window::new(start, stop).map(Some),
        (None, None) => Ok(None),
        _ => Err(Error::WindowBoundMissing),
    }
}
