//! Placing detections into the skeleton.

use super::builder::clipped_bounds;
use super::{BucketKey, BucketMap, HourLabel};
use crate::clock::{Window, same_hour};
use crate::error::{Error, Result};
use crate::session::DetectionEvent;
use tracing::warn;

/// Key of the bucket `event` belongs to.
///
/// Detections in the session's first hour go to the exact-start bucket; a
/// detection sharing an hour with a window start that is not before it goes
/// to the window-start bucket; everything else goes to its top-of-hour bucket.
pub fn bucket_key_for(event: &DetectionEvent, window: Option<&Window>) -> BucketKey {
    let detected = event.detected_at;
    let (start, _) = clipped_bounds(&event.session, window);

    let label = if same_hour(detected, start) {
        HourLabel::at(start.time())
    } else if let Some(window_start) = window.and_then(Window::start)
        && same_hour(window_start, detected)
        && window_start >= detected
    {
        HourLabel::at(window_start.time())
    } else {
        HourLabel::top_of(detected.time())
    };

    BucketKey::new(detected.date(), label)
}

/// Append `event` to its bucket.
///
/// # Errors
///
/// Returns [`Error::BucketNotFound`] if the skeleton has no bucket for the
/// event's key.
pub fn assign(event: DetectionEvent, buckets: &mut BucketMap, window: Option<&Window>) -> Result<()> {
    let key = bucket_key_for(&event, window);
    let Some(bucket) = buckets.bucket_mut(&key) else {
        return Err(Error::BucketNotFound {
            date: key.date_label(),
            label: key.label.to_string(),
            species: event.species,
            detected_at: event.detected_at,
        });
    };
    bucket.push(event);
    Ok(())
}

/// Outcome counts from [`populate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Detections placed into a bucket.
    pub assigned: usize,
    /// Detections dropped for falling outside the window.
    pub outside_window: usize,
    /// Detections with no matching bucket.
    pub unmatched: usize,
}

/// Assign every in-window detection, preserving input order per bucket.
///
/// Detections that map to a missing bucket are logged and skipped so one bad
/// row does not cost the rest of the report.
pub fn populate(
    buckets: &mut BucketMap,
    events: impl IntoIterator<Item = DetectionEvent>,
    window: Option<&Window>,
) -> PopulateSummary {
    let mut summary = PopulateSummary::default();

    for event in events {
        if window.is_some_and(|w| !w.contains(event.detected_at)) {
            summary.outside_window += 1;
            continue;
        }
        match assign(event, buckets, window) {
            Ok(()) => summary.assigned += 1,
            Err(e) => {
                warn!("skipping detection: {e}");
                summary.unmatched += 1;
            }
        }
    }

    summary
}
