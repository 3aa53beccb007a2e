//! Recording sessions and the detections recorded during them.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::collections::BTreeMap;
use tracing::debug;

/// One overnight recording run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordingSession {
    /// Calendar date the recording started on.
    pub date: NaiveDate,
    /// Local wall-clock start time.
    pub start_time: NaiveTime,
    /// Declared recording length.
    pub length: TimeDelta,
}

impl RecordingSession {
    /// Create a session.
    pub fn new(date: NaiveDate, start_time: NaiveTime, length: TimeDelta) -> Self {
        Self {
            date,
            start_time,
            length,
        }
    }

    /// Create a session whose end instant is representable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `start + length` overflows the calendar.
    pub fn try_new(date: NaiveDate, start_time: NaiveTime, length: TimeDelta) -> Result<Self> {
        let session = Self::new(date, start_time, length);
        if session.true_start().checked_add_signed(length).is_none() {
            return Err(Error::Parse {
                value: format!("{} + {length}", session.true_start()),
                expected: "a recording length ending on a representable date",
            });
        }
        Ok(session)
    }

    /// Instant the recording started.
    pub fn true_start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Instant the recording stopped, saturating at the latest representable
    /// instant.
    pub fn true_end(&self) -> NaiveDateTime {
        self.true_start()
            .checked_add_signed(self.length)
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// A single classified call.
///
/// Each detection carries its session so it can be bucketed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvent {
    /// Lower-case species code; empty means unidentified.
    pub species: String,
    /// Local instant of the call.
    pub detected_at: NaiveDateTime,
    /// Session the call was recorded in.
    pub session: RecordingSession,
}

impl DetectionEvent {
    /// Create a detection, normalizing the species code to lower case.
    pub fn new(species: &str, detected_at: NaiveDateTime, session: RecordingSession) -> Self {
        Self {
            species: species.trim().to_lowercase(),
            detected_at,
            session,
        }
    }
}

/// Source of session facts for the skeleton builder.
pub trait SessionLookup {
    /// Sessions recorded on `date`, in first-seen order.
    fn sessions(&self, date: NaiveDate) -> &[RecordingSession];
}

impl SessionLookup for BTreeMap<NaiveDate, RecordingSession> {
    fn sessions(&self, date: NaiveDate) -> &[RecordingSession] {
        self.get(&date).map(std::slice::from_ref).unwrap_or_default()
    }
}

impl SessionLookup for BTreeMap<NaiveDate, Vec<RecordingSession>> {
    fn sessions(&self, date: NaiveDate) -> &[RecordingSession] {
        self.get(&date).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Distinct recording sessions per calendar date, derived from detection rows.
///
/// A recorder stopped and restarted during one night yields several sessions
/// on that date.
#[derive(Debug, Clone, Default)]
pub struct SessionIndex {
    sessions: BTreeMap<NaiveDate, Vec<RecordingSession>>,
}

impl SessionIndex {
    /// Index the sessions referenced by `events`.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a DetectionEvent>) -> Self {
        let mut sessions: BTreeMap<NaiveDate, Vec<RecordingSession>> = BTreeMap::new();
        for event in events {
            let known = sessions.entry(event.session.date).or_default();
            if !known.contains(&event.session) {
                if !known.is_empty() {
                    debug!(
                        date = %event.session.date,
                        start = %event.session.start_time,
                        "additional recording session on date"
                    );
                }
                known.push(event.session);
            }
        }
        Self { sessions }
    }

    /// Number of indexed sessions across all dates.
    pub fn len(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }

    /// Whether no sessions are indexed.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionLookup for SessionIndex {
    fn sessions(&self, date: NaiveDate) -> &[RecordingSession] {
        self.sessions.sessions(date)
    }
}
