//! Tests for the Vesper clip export parser.

use std::io::Write;

use tempfile::NamedTempFile;
use vesper_ebird::Error;
use vesper_ebird::input::{read_detection_file, read_detection_files, report_dates};
use vesper_ebird::session::SessionIndex;

const HEADER: &str = "season,year,detector,species,site,date,recording_start,recording_length,detection_time,real_detection_time";

fn export(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_vesper_export() {
    let file = export(&[
        "Fall,2020,thrush,SWTH,MSGR,09/08/20,20:43:00,8:21:00,0:07:00,09/08/20 20:50:00",
        "Fall,2020,tseep,,MSGR,09/08/20,20:43:00,8:21:00,5:27:00,09/09/20 02:10:00",
    ]);

    let events = read_detection_file(file.path()).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].species, "swth");
    assert_eq!(events[0].detected_at.to_string(), "2020-09-08 20:50:00");
    assert_eq!(events[0].session.true_end().to_string(), "2020-09-09 05:04:00");
    assert_eq!(events[1].species, "");
}

#[test]
fn test_parse_csv_with_utf8_bom() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "\u{FEFF}{HEADER}").unwrap();
    writeln!(
        file,
        "Fall,2020,thrush,SWTH,MSGR,09/08/20,20:43:00,8:21:00,0:07:00,09/08/20 20:50:00"
    )
    .unwrap();
    file.flush().unwrap();

    let events = read_detection_file(file.path()).unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_multiple_files_keep_order_and_sessions() {
    let first = export(&[
        "Fall,2020,thrush,SWTH,MSGR,09/08/20,20:43:00,8:21:00,0:07:00,09/08/20 20:50:00",
    ]);
    let second = export(&[
        "Fall,2020,thrush,GRCF,MSGR,09/09/20,19:58:00,9:10:00,1:02:00,09/09/20 21:00:00",
        ",,,,,,,,,",
    ]);

    let events =
        read_detection_files(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].species, "grcf");
    let sessions = SessionIndex::from_events(&events);
    assert_eq!(sessions.len(), 2);
    assert_eq!(report_dates(&events, None).len(), 2);
}

#[test]
fn test_unparseable_length_names_the_line() {
    let file = export(&[
        "Fall,2020,thrush,SWTH,MSGR,09/08/20,20:43:00,8:21:00,0:07:00,09/08/20 20:50:00",
        "Fall,2020,thrush,SWTH,MSGR,09/08/20,20:43:00,long,0:07:00,09/08/20 20:50:00",
    ]);

    let err = read_detection_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidDetectionFormat { ref message } if message.starts_with("line 3")));
}
