//! Hour-bucket skeleton construction.

use super::{BucketKey, BucketMap, HourLabel};
use crate::clock::{Window, same_day, top_of_hour};
use crate::constants::window::NEXT_DAY_CUTOFF_HOUR;
use crate::session::{RecordingSession, SessionLookup};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::collections::BTreeSet;
use tracing::debug;

/// Effective `(start, end)` of a session after window clipping.
///
/// A window start only moves the session start when it is later and on the
/// same calendar day. A window stop only moves the end when it falls on the
/// start's day, or on the following day before noon; it never extends a
/// session past its recorded end.
pub fn clipped_bounds(
    session: &RecordingSession,
    window: Option<&Window>,
) -> (NaiveDateTime, NaiveDateTime) {
    let natural_start = session.true_start();
    let start = match window.and_then(Window::start) {
        Some(window_start) if same_day(window_start, natural_start) && window_start > natural_start => {
            window_start
        }
        _ => natural_start,
    };

    let natural_end = session.true_end();
    let end = match window.and_then(Window::stop) {
        Some(stop) if stop_clips(stop, start) => stop.min(natural_end),
        _ => natural_end,
    };

    (start, end)
}

fn stop_clips(stop: NaiveDateTime, start: NaiveDateTime) -> bool {
    if same_day(stop, start) {
        return true;
    }
    start
        .date()
        .succ_opt()
        .is_some_and(|next_day| stop.date() == next_day && stop.hour() < NEXT_DAY_CUTOFF_HOUR)
}

/// Build the empty bucket skeleton for `dates`.
///
/// Each session on a date contributes an exact-start bucket followed by one
/// bucket per hour boundary strictly before its (clipped) end. Hours past
/// midnight land under the following date. Dates without a session, or whose
/// sessions are entirely clipped away, contribute nothing. `dates` is only
/// read.
pub fn build_skeleton<L>(
    dates: &BTreeSet<NaiveDate>,
    sessions: &L,
    window: Option<&Window>,
) -> BucketMap
where
    L: SessionLookup + ?Sized,
{
    let mut buckets = BucketMap::default();

    for &date in dates {
        let on_date = sessions.sessions(date);
        if on_date.is_empty() {
            debug!(%date, "no recording session for date, skipping");
        }
        for session in on_date {
            add_session(&mut buckets, session, window);
        }
    }

    buckets
}

fn add_session(buckets: &mut BucketMap, session: &RecordingSession, window: Option<&Window>) {
    let (start, end) = clipped_bounds(session, window);
    if start >= end {
        debug!(date = %session.date, %start, %end, "session lies outside the window, skipping");
        return;
    }

    buckets.insert_empty(BucketKey::new(start.date(), HourLabel::at(start.time())));

    let mut boundary = top_of_hour(start).checked_add_signed(TimeDelta::hours(1));
    while let Some(hour) = boundary.filter(|hour| *hour < end) {
        buckets.insert_empty(BucketKey::new(hour.date(), HourLabel::top_of(hour.time())));
        boundary = hour.checked_add_signed(TimeDelta::hours(1));
    }
}
