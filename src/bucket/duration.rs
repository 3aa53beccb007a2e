//! Minutes of recording represented by a bucket.

use super::Bucket;
use crate::clock::{Window, same_hour};
use chrono::Timelike;

/// Recording minutes covered by `bucket`, or `None` for an empty bucket.
///
/// Bounds come from the first detection's session, narrowed by the window
/// where it is stricter. The bucket holding the end reports minutes elapsed
/// in that hour (less the start minutes if the start shares it), the bucket
/// holding the start reports the remainder of its hour, and any other bucket
/// is a full hour.
pub fn duration_minutes(bucket: &Bucket<'_>, window: Option<&Window>) -> Option<u32> {
    let first = bucket.events.first()?;

    let mut start = first.session.true_start();
    let mut end = first.session.true_end();
    if let Some(window_start) = window.and_then(Window::start)
        && window_start > start
    {
        start = window_start;
    }
    if let Some(stop) = window.and_then(Window::stop)
        && stop < end
    {
        end = stop;
    }

    let bucket_start = bucket.key.start();
    let minutes = if same_hour(bucket_start, end) {
        if same_hour(bucket_start, start) {
            end.minute().saturating_sub(start.minute())
        } else {
            end.minute()
        }
    } else if same_hour(bucket_start, start) {
        60 - start.minute()
    } else {
        60
    };

    Some(minutes)
}
