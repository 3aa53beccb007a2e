//! Per-bucket metrics handed to the writers.

use crate::bucket::{BucketKey, BucketMap, duration_minutes, estimate_individuals};
use crate::clock::Window;
use crate::session::DetectionEvent;
use crate::taxonomy::Taxonomy;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Calls and probable birds for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesTally {
    /// Raw species code as detected.
    pub code: String,
    /// Name the code is reported under.
    pub name: String,
    /// Number of calls.
    pub calls: usize,
    /// Estimated number of calling birds.
    pub individuals: usize,
}

/// Metrics for one non-empty bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BucketSummary {
    /// Bucket address.
    #[serde(flatten)]
    pub key: BucketKey,
    /// Recording minutes the bucket represents.
    pub duration_minutes: Option<u32>,
    /// Species heard, ordered by name length then name.
    pub species: Vec<SpeciesTally>,
}

/// Species totals for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTotal {
    /// Calendar date of the buckets summed.
    pub date: NaiveDate,
    /// Summed tallies.
    pub species: Vec<SpeciesTally>,
}

/// Read-only result of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Non-empty buckets in date then hour order.
    pub buckets: Vec<BucketSummary>,
    /// Per-date totals in date order.
    pub totals: Vec<DailyTotal>,
}

impl Report {
    /// Summarize every non-empty bucket of a populated map.
    pub fn build(buckets: &BucketMap, window: Option<&Window>, taxonomy: &Taxonomy) -> Self {
        let mut summaries = Vec::new();
        let mut totals: BTreeMap<NaiveDate, BTreeMap<String, SpeciesTally>> = BTreeMap::new();

        for bucket in buckets.iter().filter(|bucket| !bucket.events.is_empty()) {
            let species = tally_species(bucket.events, taxonomy);

            let day = totals.entry(bucket.key.date).or_default();
            for tally in &species {
                day.entry(tally.code.clone())
                    .and_modify(|total| {
                        total.calls += tally.calls;
                        total.individuals += tally.individuals;
                    })
                    .or_insert_with(|| tally.clone());
            }

            summaries.push(BucketSummary {
                key: bucket.key,
                duration_minutes: duration_minutes(&bucket, window),
                species,
            });
        }

        let totals = totals
            .into_iter()
            .map(|(date, species)| DailyTotal {
                date,
                species: sorted(species.into_values().collect()),
            })
            .collect();

        Self {
            buckets: summaries,
            totals,
        }
    }

    /// Whether nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn tally_species(events: &[DetectionEvent], taxonomy: &Taxonomy) -> Vec<SpeciesTally> {
    let mut calls: BTreeMap<&str, usize> = BTreeMap::new();
    for event in events {
        *calls.entry(event.species.as_str()).or_default() += 1;
    }

    sorted(
        calls
            .into_iter()
            .map(|(code, calls)| SpeciesTally {
                code: code.to_string(),
                name: taxonomy.report_name(code),
                calls,
                individuals: estimate_individuals(events, code),
            })
            .collect(),
    )
}

fn sorted(mut tallies: Vec<SpeciesTally>) -> Vec<SpeciesTally> {
    tallies.sort_by(|a, b| {
        a.name
            .len()
            .cmp(&b.name.len())
            .then_with(|| a.name.cmp(&b.name))
    });
    tallies
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bucket::{build_skeleton, populate};
    use crate::clock::{parse_clock_time, parse_detection_instant, parse_recording_length};
    use crate::session::RecordingSession;
    use std::collections::BTreeSet;

    fn session() -> RecordingSession {
        RecordingSession::new(
            NaiveDate::from_ymd_opt(2020, 9, 8).unwrap(),
            parse_clock_time("20:43:00").unwrap(),
            parse_recording_length("8:21:00").unwrap(),
        )
    }

    fn detection(species: &str, at: &str) -> DetectionEvent {
        DetectionEvent::new(species, parse_detection_instant(at).unwrap(), session())
    }

    fn report(events: Vec<DetectionEvent>) -> Report {
        let s = session();
        let mut buckets =
            build_skeleton(&BTreeSet::from([s.date]), &BTreeMap::from([(s.date, s)]), None);
        populate(&mut buckets, events, None);
        Report::build(&buckets, None, &Taxonomy::default())
    }

    #[test]
    fn test_only_non_empty_buckets_are_reported() {
        let report = report(vec![
            detection("swth", "09/08/20 20:50:00"),
            detection("swth", "09/09/20 02:10:00"),
        ]);

        let keys: Vec<String> = report.buckets.iter().map(|b| b.key.to_string()).collect();
        assert_eq!(keys, ["09/08/20 20:43:00", "09/09/20 02:00:00"]);
        assert_eq!(report.buckets[0].duration_minutes, Some(17));
        assert_eq!(report.buckets[1].duration_minutes, Some(60));
    }

    #[test]
    fn test_species_tallies_and_order() {
        let report = report(vec![
            detection("swth", "09/08/20 21:10:00"),
            detection("", "09/08/20 21:10:05"),
            detection("swth", "09/08/20 21:10:10"),
            detection("swth", "09/08/20 21:30:00"),
        ]);

        let species = &report.buckets[0].species;
        assert_eq!(species.len(), 2);
        assert_eq!(species[0].name, "swth");
        assert_eq!(species[0].calls, 3);
        assert_eq!(species[0].individuals, 2);
        assert_eq!(species[1].name, "passerine sp.");
        assert_eq!(species[1].individuals, 1);
    }

    #[test]
    fn test_daily_totals_sum_buckets_per_date() {
        let report = report(vec![
            detection("swth", "09/08/20 21:10:00"),
            detection("swth", "09/08/20 22:10:00"),
            detection("swth", "09/09/20 01:10:00"),
        ]);

        assert_eq!(report.totals.len(), 2);
        let first = &report.totals[0].species[0];
        assert_eq!((first.calls, first.individuals), (2, 2));
        let second = &report.totals[1].species[0];
        assert_eq!((second.calls, second.individuals), (1, 1));
    }

    #[test]
    fn test_empty_map_gives_empty_report() {
        let report = Report::build(&BucketMap::default(), None, &Taxonomy::default());
        assert!(report.is_empty());
        assert!(report.totals.is_empty());
    }
}
