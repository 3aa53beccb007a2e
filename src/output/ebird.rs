//! eBird record-format checklist export.
//!
//! One row per (bucket, species), written without a header as eBird's
//! record-format import expects.

use crate::config::{Config, Station};
use crate::constants::{ebird, formats};
use crate::error::{Error, Result};
use crate::output::{BucketSummary, Report, SpeciesTally};
use crate::taxonomy::{Taxonomy, display_name, is_grouping};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A single eBird record-format row.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    /// eBird common name.
    #[serde(rename = "Common Name")]
    pub common_name: String,
    /// Genus (left blank).
    #[serde(rename = "Genus")]
    pub genus: String,
    /// Species (left blank).
    #[serde(rename = "Species")]
    pub species: String,
    /// Probable birds.
    #[serde(rename = "Number")]
    pub number: usize,
    /// Species comments.
    #[serde(rename = "Species Comments")]
    pub species_comments: String,
    /// Station location name.
    #[serde(rename = "Location Name")]
    pub location_name: String,
    /// Station latitude.
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Station longitude.
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Checklist date (`M/DD/YYYY`).
    #[serde(rename = "Date")]
    pub date: String,
    /// Checklist start time (`HH:mm`).
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// Station state or province.
    #[serde(rename = "State/Province")]
    pub state: String,
    /// Country code.
    #[serde(rename = "Country Code")]
    pub country_code: &'static str,
    /// eBird protocol code.
    #[serde(rename = "Protocol")]
    pub protocol: &'static str,
    /// Number of observers.
    #[serde(rename = "Number of Observers")]
    pub observers: &'static str,
    /// Checklist duration in minutes.
    #[serde(rename = "Duration")]
    pub duration: Option<u32>,
    /// Complete checklist flag.
    #[serde(rename = "All observations reported?")]
    pub all_reported: &'static str,
    /// Distance (left blank).
    #[serde(rename = "Effort Distance Miles")]
    pub distance_miles: String,
    /// Area (left blank).
    #[serde(rename = "Effort area acres")]
    pub area_acres: String,
    /// Submission comments.
    #[serde(rename = "Submission Comments")]
    pub submission_comments: String,
}

/// Build checklist rows for every species in every reported bucket.
pub fn checklist_rows(
    report: &Report,
    station: &Station,
    config: &Config,
    taxonomy: &Taxonomy,
) -> Vec<ChecklistRow> {
    let submission_comments = format!("{} {}", station.kit, ebird::SUBMISSION_COMMENT)
        .trim()
        .to_string();

    let mut rows = Vec::new();
    for bucket in &report.buckets {
        for tally in &bucket.species {
            if taxonomy.is_suspect(&tally.code) {
                warn!(
                    "You saw {} {} - is that right? Or did you click N by accident?",
                    tally.calls,
                    display_name(&tally.name)
                );
            }
            rows.push(row(bucket, tally, station, config, taxonomy, &submission_comments));
        }
    }
    rows
}

fn row(
    bucket: &BucketSummary,
    tally: &SpeciesTally,
    station: &Station,
    config: &Config,
    taxonomy: &Taxonomy,
    submission_comments: &str,
) -> ChecklistRow {
    // A blank name makes eBird reject the row rather than import a slip.
    let common_name = if taxonomy.is_suspect(&tally.code) {
        String::new()
    } else {
        common_name(tally, config)
    };
    ChecklistRow {
        common_name,
        genus: String::new(),
        species: String::new(),
        number: tally.individuals,
        species_comments: species_comment(tally, config),
        location_name: station.location_name.clone(),
        latitude: station.latitude,
        longitude: station.longitude,
        date: bucket.key.date.format(formats::EBIRD_DATE).to_string(),
        start_time: bucket.key.label.short(),
        state: station.state.clone(),
        country_code: ebird::COUNTRY_CODE,
        protocol: ebird::PROTOCOL,
        observers: ebird::OBSERVERS,
        duration: bucket.duration_minutes,
        all_reported: ebird::ALL_OBSERVATIONS_REPORTED,
        distance_miles: String::new(),
        area_acres: String::new(),
        submission_comments: submission_comments.to_string(),
    }
}

fn common_name(tally: &SpeciesTally, config: &Config) -> String {
    if is_grouping(&tally.name) {
        return tally.name.clone();
    }
    let code = tally.code.to_uppercase();
    config.slash_codes.get(&code).cloned().unwrap_or(code)
}

fn species_comment(tally: &SpeciesTally, config: &Config) -> String {
    let code = tally.code.to_uppercase();
    let body = if is_grouping(&tally.name) {
        ebird::GROUP_COMMENT.to_string()
    } else if let Some(note) = config.species.get(&code).filter(|note| !note.wip) {
        let page = if note.page.is_empty() {
            String::new()
        } else {
            format!(", or the updated page at {}", note.page)
        };
        format!(
            "{} {}<br><br> For more on {code} NFC identification, consult this checklist {}{page}.",
            note.text,
            ebird::PATTERN_NOTE,
            note.example
        )
    } else {
        ebird::DEFAULT_SPECIES_COMMENT.to_string()
    };

    format!("{} NFC.<br><br> {body}", tally.calls).replace('\n', "<br>")
}

/// Export file path for a user-supplied name; `.csv` is appended once.
pub fn export_path(name: &str) -> Result<PathBuf> {
    let trimmed = name.trim();
    let stem = trimmed.strip_suffix(".csv").unwrap_or(trimmed);
    if stem.is_empty() {
        return Err(Error::ExportNameMissing);
    }
    Ok(PathBuf::from(format!("{stem}.csv")))
}

/// Headerless CSV writer for checklist rows.
pub struct ChecklistWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl ChecklistWriter {
    /// Create a new checklist writer.
    pub fn new(path: &Path) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| Error::ExportWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    /// Write one row.
    pub fn write_row(&mut self, row: &ChecklistRow) -> Result<()> {
        self.writer.serialize(row).map_err(|e| Error::ExportWrite {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Flush buffered rows to disk.
    pub fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write all rows to `path`.
pub fn write_checklists(path: &Path, rows: &[ChecklistRow]) -> Result<()> {
    let mut writer = ChecklistWriter::new(path)?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.finalize()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bucket::{BucketKey, HourLabel};
    use crate::config::SpeciesComment;
    use chrono::{NaiveDate, NaiveTime};

    fn station() -> Station {
        Station {
            location_name: "Middlesex Ridge".to_string(),
            latitude: 44.3,
            longitude: -72.7,
            state: "VT".to_string(),
            kit: "Microphone on a pole.".to_string(),
        }
    }

    fn report() -> Report {
        let tally = |code: &str, name: &str| SpeciesTally {
            code: code.to_string(),
            name: name.to_string(),
            calls: 3,
            individuals: 2,
        };
        Report {
            buckets: vec![BucketSummary {
                key: BucketKey::new(
                    NaiveDate::from_ymd_opt(2020, 9, 8).unwrap(),
                    HourLabel::at(NaiveTime::from_hms_opt(20, 43, 0).unwrap()),
                ),
                duration_minutes: Some(17),
                species: vec![tally("swth", "swth"), tally("", "passerine sp.")],
            }],
            totals: Vec::new(),
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config
            .slash_codes
            .insert("SWTH".to_string(), "Swainson's Thrush".to_string());
        config.species.insert(
            "SWTH".to_string(),
            SpeciesComment {
                text: "Rising whistle.\nSharp onset.".to_string(),
                example: "https://ebird.org/checklist/S1".to_string(),
                page: String::new(),
                wip: false,
            },
        );
        config
    }

    #[test]
    fn test_rows_fill_checklist_columns() {
        let rows = checklist_rows(&report(), &station(), &config(), &Taxonomy::default());
        assert_eq!(rows.len(), 2);

        let swth = &rows[0];
        assert_eq!(swth.common_name, "Swainson's Thrush");
        assert_eq!(swth.number, 2);
        assert_eq!(swth.date, "9/08/2020");
        assert_eq!(swth.start_time, "20:43");
        assert_eq!(swth.duration, Some(17));
        assert!(swth.species_comments.starts_with("3 NFC.<br><br> Rising whistle.<br>Sharp onset."));
        assert!(swth.submission_comments.starts_with("Microphone on a pole. Calls detected"));

        let grouping = &rows[1];
        assert_eq!(grouping.common_name, "passerine sp.");
        assert!(grouping.species_comments.contains("fifteen seconds"));
    }

    #[test]
    fn test_wip_note_falls_back_to_default_comment() {
        let mut config = config();
        config.species.get_mut("SWTH").unwrap().wip = true;
        let rows = checklist_rows(&report(), &station(), &config, &Taxonomy::default());
        assert!(rows[0].species_comments.contains("available upon request"));
    }

    #[test]
    fn test_export_path() {
        assert_eq!(export_path("2020-09-07 recorded").unwrap(), PathBuf::from("2020-09-07 recorded.csv"));
        assert_eq!(export_path("out.csv").unwrap(), PathBuf::from("out.csv"));
        assert!(matches!(export_path(""), Err(Error::ExportNameMissing)));
        assert!(matches!(export_path(".csv"), Err(Error::ExportNameMissing)));
    }

    #[test]
    fn test_write_checklists_has_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = checklist_rows(&report(), &station(), &config(), &Taxonomy::default());

        write_checklists(&path, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Swainson's Thrush,,,2,"));
        assert!(!contents.contains("Common Name"));
        assert!(lines[0].contains(",9/08/2020,20:43,VT,US,P54,1,17,N,,,"));
    }

    #[test]
    fn test_note_page_is_linked_when_configured() {
        let mut config = config();
        assert!(checklist_rows(&report(), &station(), &config, &Taxonomy::default())[0]
            .species_comments
            .ends_with("checklist https://ebird.org/checklist/S1."));

        config.species.get_mut("SWTH").unwrap().page =
            "https://birdinginvermont.com/nfc-species/swth".to_string();
        let rows = checklist_rows(&report(), &station(), &config, &Taxonomy::default());
        assert!(rows[0].species_comments.ends_with(
            "checklist https://ebird.org/checklist/S1, or the updated page at https://birdinginvermont.com/nfc-species/swth."
        ));
    }

    #[test]
    fn test_suspect_code_leaves_common_name_blank() {
        let mut report = report();
        report.buckets[0].species.push(SpeciesTally {
            code: "nowa".to_string(),
            name: "nowa".to_string(),
            calls: 1,
            individuals: 1,
        });

        let rows = checklist_rows(&report, &station(), &config(), &Taxonomy::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[2].common_name.is_empty());
        assert_eq!(rows[2].number, 1);
    }
}
