//! Configuration type definitions.

use crate::constants::DEFAULT_STATION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Recording stations by code.
    #[serde(default)]
    pub stations: BTreeMap<String, Station>,

    /// Species identification notes by upper-case code.
    #[serde(default)]
    pub species: BTreeMap<String, SpeciesComment>,

    /// Extra code → eBird common name entries, keyed by upper-case code.
    #[serde(default)]
    pub slash_codes: BTreeMap<String, String>,
}

/// Default run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Station used when `--station` is not given.
    pub station: String,

    /// Console report format.
    pub format: ReportFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            station: DEFAULT_STATION.to_string(),
            format: ReportFormat::Text,
        }
    }
}

/// A recording station, as it appears on eBird checklists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Station {
    /// eBird location name.
    pub location_name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// State or province code.
    pub state: String,
    /// Recording kit description, prefixed to submission comments.
    pub kit: String,
}

/// Identification note for one species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesComment {
    /// Description of the call.
    pub text: String,
    /// Link to an example checklist.
    pub example: String,
    /// Link to a maintained identification page, if any.
    pub page: String,
    /// Work in progress; not used in exports yet.
    pub wip: bool,
}

/// Console report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// The report structure as JSON.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}
