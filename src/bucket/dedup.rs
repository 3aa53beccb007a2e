//! Collapsing repeated calls into probable individuals.

use crate::constants::dedup::REPEAT_CALL_THRESHOLD_SECS;
use crate::session::DetectionEvent;
use chrono::{NaiveDateTime, TimeDelta};

/// Estimate how many birds of `species` called in `events`.
///
/// Calls are taken in input order; each call following the previous one by
/// at most the repeat threshold is counted as the same bird. Bursts collapse
/// only through consecutive pairs.
pub fn estimate_individuals(events: &[DetectionEvent], species: &str) -> usize {
    let calls: Vec<NaiveDateTime> = events
        .iter()
        .filter(|event| event.species == species)
        .map(|event| event.detected_at)
        .collect();

    let repeats = calls
        .windows(2)
        .filter(|pair| is_repeat(pair[0], pair[1]))
        .count();

    calls.len() - repeats
}

fn is_repeat(call: NaiveDateTime, next: NaiveDateTime) -> bool {
    let gap = next - call;
    gap >= TimeDelta::zero() && gap <= TimeDelta::seconds(REPEAT_CALL_THRESHOLD_SECS)
}
