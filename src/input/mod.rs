//! Reading Vesper clip exports.
//!
//! Turns exported detection tables into [`DetectionEvent`]s and derives the
//! set of session dates a report should cover.

mod parser;

pub use parser::{read_detection_file, read_detection_files};

use crate::clock::Window;
use crate::session::DetectionEvent;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Session dates with at least one detection inside `window`.
pub fn report_dates(events: &[DetectionEvent], window: Option<&Window>) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .filter(|event| window.is_none_or(|w| w.contains(event.detected_at)))
        .map(|event| event.session.date)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::RecordingSession;
    use chrono::{NaiveTime, TimeDelta};

    #[test]
    fn test_report_dates_follow_window() {
        let make = |day: u32, hour: u32| {
            let date = NaiveDate::from_ymd_opt(2020, 9, day).unwrap();
            let session = RecordingSession::new(
                date,
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                TimeDelta::hours(9),
            );
            DetectionEvent::new("swth", date.and_hms_opt(hour, 0, 0).unwrap(), session)
        };
        let events = vec![make(7, 21), make(8, 21), make(9, 21)];

        assert_eq!(report_dates(&events, None).len(), 3);

        let window = Window::for_night(NaiveDate::from_ymd_opt(2020, 9, 8).unwrap());
        let dates = report_dates(&events, Some(&window));
        assert_eq!(
            dates.into_iter().collect::<Vec<_>>(),
            [NaiveDate::from_ymd_opt(2020, 9, 8).unwrap()]
        );
    }
}
