//! Detection file parsing.
//!
//! Parses Vesper clip-export CSV files. Uses the `csv` crate for robust
//! parsing; columns other than the ones below are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::clock::{
    parse_clock_time, parse_detection_instant, parse_recording_length, parse_session_date,
};
use crate::session::{DetectionEvent, RecordingSession};

/// Internal record for CSV deserialization.
///
/// Every field defaults to empty so file-boundary artifacts can be
/// recognised by their empty `season` before anything is parsed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClipRecord {
    season: String,
    species: String,
    date: String,
    recording_start: String,
    recording_length: String,
    real_detection_time: String,
}

impl ClipRecord {
    fn into_event(self, line: usize) -> Result<DetectionEvent, Error> {
        let at_line = |e: Error| Error::InvalidDetectionFormat {
            message: format!("line {line}: {e}"),
        };

        let session = RecordingSession::try_new(
            parse_session_date(&self.date).map_err(at_line)?,
            parse_clock_time(&self.recording_start).map_err(at_line)?,
            parse_recording_length(&self.recording_length).map_err(at_line)?,
        )
        .map_err(at_line)?;
        let detected_at = parse_detection_instant(&self.real_detection_time).map_err(at_line)?;

        Ok(DetectionEvent::new(&self.species, detected_at, session))
    }
}

/// Parse a detection file and return its detections in file order.
///
/// Handles UTF-8 BOM if present and quoted fields. Rows with an empty
/// `season` are skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A date, start time, length or detection time cannot be parsed
pub fn read_detection_file(path: &Path) -> Result<Vec<DetectionEvent>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::DetectionParseFailed {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut events = Vec::new();
    let mut skipped = 0;

    for (line_num, result) in reader.deserialize::<ClipRecord>().enumerate() {
        let line = line_num + 2;
        let record = result.map_err(|e| Error::InvalidDetectionFormat {
            message: format!("line {line}: {e}"),
        })?;

        if record.season.is_empty() {
            skipped += 1;
            continue;
        }

        events.push(record.into_event(line)?);
    }

    debug!(
        path = %path.display(),
        detections = events.len(),
        skipped,
        "read detection file"
    );

    Ok(events)
}

/// Read several detection files, concatenating them in argument order.
///
/// # Errors
///
/// Fails when no paths are given, and on the first file that cannot be read
/// or parsed.
pub fn read_detection_files(paths: &[PathBuf]) -> Result<Vec<DetectionEvent>, Error> {
    if paths.is_empty() {
        return Err(Error::NoInputFiles);
    }
    let mut events = Vec::new();
    for path in paths {
        events.extend(read_detection_file(path)?);
    }
    Ok(events)
}
