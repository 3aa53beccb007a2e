//! JSON rendering of the report.

use crate::error::{Error, Result};
use crate::output::Report;

/// Serialize the report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| Error::ReportSerialize { source: e })
}
