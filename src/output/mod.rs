//! Report model and writers.

mod console;
mod ebird;
mod json;
mod report;

pub use console::render_text;
pub use ebird::{ChecklistRow, ChecklistWriter, checklist_rows, export_path, write_checklists};
pub use json::render_json;
pub use report::{BucketSummary, DailyTotal, Report, SpeciesTally};
