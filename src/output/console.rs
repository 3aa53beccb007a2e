//! Human-readable report for the terminal.

use std::fmt::Write;

use crate::constants::formats::SESSION_DATE;
use crate::output::{Report, SpeciesTally};
use crate::taxonomy::{Taxonomy, display_name};

/// Render the report as plain text tables.
///
/// Buckets are grouped under a `Date:` heading per calendar date, followed
/// by per-date totals.
pub fn render_text(report: &Report, taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    let mut current_date = None;

    for bucket in &report.buckets {
        if current_date != Some(bucket.key.date) {
            current_date = Some(bucket.key.date);
            let _ = writeln!(out);
            let _ = writeln!(out, "Date: {}", bucket.key.date_label());
        }

        let _ = writeln!(out, "Hour: {}", bucket.key.label.short());
        if let Some(minutes) = bucket.duration_minutes {
            let _ = writeln!(out, "Duration: {minutes} mins.");
        }
        let _ = writeln!(out, "Species\tBirds\tNFCs");
        for tally in &bucket.species {
            if taxonomy.is_suspect(&tally.code) {
                let _ = writeln!(out, "{}:\t {}", display_name(&tally.name), tally.calls);
            } else {
                let _ = writeln!(
                    out,
                    "{}:\t{}\t({})",
                    display_name(&tally.name),
                    tally.individuals,
                    tally.calls
                );
            }
        }
        let _ = writeln!(out);
    }

    for total in &report.totals {
        let _ = writeln!(out, "{} totals:", total.date.format(SESSION_DATE));
        for tally in &total.species {
            let _ = writeln!(out, "{}", total_line(tally));
        }
        let _ = writeln!(out);
    }

    out
}

fn total_line(tally: &SpeciesTally) -> String {
    format!(
        "{}: {} probable {}, with {} total calls.",
        display_name(&tally.name),
        tally.individuals,
        if tally.individuals == 1 { "bird" } else { "birds" },
        tally.calls
    )
}
