//! Bucket keys and the bucket map.

use crate::constants::formats;
use crate::error::{Error, Result};
use crate::session::DetectionEvent;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Label of one hourly bucket within a calendar date.
///
/// Normally the top of an hour. The first bucket of a session is labelled
/// with its exact (possibly clipped) start instead. A start that lands
/// exactly on the hour collapses to the plain top-of-hour label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourLabel {
    hour: u32,
    exact: Option<NaiveTime>,
}

impl HourLabel {
    /// Top-of-hour label for the hour containing `time`.
    pub fn top_of(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            exact: None,
        }
    }

    /// Label for a bucket beginning exactly at `time`.
    pub fn at(time: NaiveTime) -> Self {
        if time.minute() == 0 && time.second() == 0 && time.nanosecond() == 0 {
            Self::top_of(time)
        } else {
            Self {
                hour: time.hour(),
                exact: Some(time),
            }
        }
    }

    /// Clock hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Exact start time when the bucket does not begin on the hour.
    pub fn exact(&self) -> Option<NaiveTime> {
        self.exact
    }

    /// Time of day the bucket begins.
    pub fn time(&self) -> NaiveTime {
        self.exact.unwrap_or_else(|| {
            NaiveTime::from_hms_opt(self.hour, 0, 0).unwrap_or(NaiveTime::MIN)
        })
    }

    /// `HH:mm` form used in checklists.
    pub fn short(&self) -> String {
        self.time().format(formats::HOUR_MINUTE).to_string()
    }
}

impl Ord for HourLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time().cmp(&other.time())
    }
}

impl PartialOrd for HourLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time().format(formats::CLOCK_TIME))
    }
}

impl Serialize for HourLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::str::FromStr for HourLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::clock::parse_clock_time(s).map(Self::at)
    }
}

/// Address of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BucketKey {
    /// Calendar date of the bucket's hour.
    pub date: NaiveDate,
    /// Hour label within that date.
    pub label: HourLabel,
}

impl BucketKey {
    /// Create a key.
    pub fn new(date: NaiveDate, label: HourLabel) -> Self {
        Self { date, label }
    }

    /// Instant the bucket begins.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.label.time())
    }

    /// Date key in `MM/DD/YY` form.
    pub fn date_label(&self) -> String {
        self.date.format(formats::SESSION_DATE).to_string()
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_label(), self.label)
    }
}

/// Borrowed view of a single bucket.
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    /// Where the bucket lives.
    pub key: BucketKey,
    /// Detections in input order.
    pub events: &'a [DetectionEvent],
}

/// Calendar date → hour label → detections.
///
/// Iteration is ordered by date, then by label time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketMap {
    dates: BTreeMap<NaiveDate, BTreeMap<HourLabel, Vec<DetectionEvent>>>,
}

impl BucketMap {
    /// Ensure an (initially empty) bucket exists for `key`.
    pub(crate) fn insert_empty(&mut self, key: BucketKey) {
        self.dates
            .entry(key.date)
            .or_default()
            .entry(key.label)
            .or_default();
    }

    pub(crate) fn bucket_mut(&mut self, key: &BucketKey) -> Option<&mut Vec<DetectionEvent>> {
        self.dates.get_mut(&key.date)?.get_mut(&key.label)
    }

    /// Detections in the bucket at `key`, if the bucket exists.
    pub fn get(&self, key: &BucketKey) -> Option<&[DetectionEvent]> {
        self.dates
            .get(&key.date)?
            .get(&key.label)
            .map(Vec::as_slice)
    }

    /// Dates with at least one bucket.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.keys().copied()
    }

    /// Labels present on `date`, in order.
    pub fn labels(&self, date: NaiveDate) -> Vec<HourLabel> {
        self.dates
            .get(&date)
            .map(|hours| hours.keys().copied().collect())
            .unwrap_or_default()
    }

    /// All buckets in date then label order.
    pub fn iter(&self) -> impl Iterator<Item = Bucket<'_>> {
        self.dates.iter().flat_map(|(date, hours)| {
            hours.iter().map(move |(label, events)| Bucket {
                key: BucketKey::new(*date, *label),
                events: events.as_slice(),
            })
        })
    }

    /// Set of all bucket keys.
    pub fn keys(&self) -> BTreeSet<BucketKey> {
        self.iter().map(|bucket| bucket.key).collect()
    }

    /// Total number of buckets.
    pub fn len(&self) -> usize {
        self.dates.values().map(BTreeMap::len).sum()
    }

    /// Whether the map holds no buckets.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
