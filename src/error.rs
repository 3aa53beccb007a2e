//! Error types for vesper-ebird.

/// Result type alias for vesper-ebird operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for vesper-ebird.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Station not present in configuration.
    #[error("station '{name}' not found in configuration")]
    StationNotFound {
        /// Requested station code.
        name: String,
    },

    /// A timestamp or duration could not be decomposed into numeric parts.
    #[error("could not parse '{value}' as {expected}")]
    Parse {
        /// The offending input.
        value: String,
        /// Human readable description of the expected shape.
        expected: &'static str,
    },

    /// Only one side of the reporting window was supplied.
    #[error("You need both a start and an end date")]
    WindowBoundMissing,

    /// The reporting window stop precedes its start.
    #[error("The end cannot precede the beginning.")]
    WindowReversed {
        /// Window start.
        start: chrono::NaiveDateTime,
        /// Window stop.
        stop: chrono::NaiveDateTime,
    },

    /// A detection maps to a bucket the skeleton never created.
    #[error("no bucket {date} {label} for {species:?} detected at {detected_at}")]
    BucketNotFound {
        /// Calendar date key (`MM/DD/YY`).
        date: String,
        /// Hour label (`HH:mm:ss`).
        label: String,
        /// Species code of the offending detection.
        species: String,
        /// Detection instant.
        detected_at: chrono::NaiveDateTime,
    },

    /// No input files were given.
    #[error("no detection files given")]
    NoInputFiles,

    /// Failed to open or read a detection file.
    #[error("failed to parse detection file '{path}'")]
    DetectionParseFailed {
        /// Path to the detection file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid detection file contents.
    #[error("invalid detection file format: {message}")]
    InvalidDetectionFormat {
        /// Description of the format error.
        message: String,
    },

    /// Export requested without a usable file name.
    #[error("Please provide an export file name")]
    ExportNameMissing,

    /// Failed to write the checklist export.
    #[error("failed to write checklist export '{path}'")]
    ExportWrite {
        /// Path to the export file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize the report as JSON.
    #[error("failed to serialize report")]
    ReportSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
