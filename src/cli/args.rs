//! CLI argument definitions.

use super::validators::{parse_night, parse_window_time};
use crate::config::ReportFormat;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Turn Vesper nocturnal flight call detections into hourly eBird checklists.
#[derive(Debug, Parser)]
#[command(name = "vesper-ebird")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Vesper clip export files (CSV).
    pub inputs: Vec<PathBuf>,

    /// Common options for reporting.
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create a settings file with defaults.
    Init,
    /// Display current configuration.
    Show,
    /// Print the settings file path in use.
    Path,
}

/// Arguments for a report run.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Settings file (the VESPER_EBIRD_SETTINGS environment variable wins).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report window start, e.g. "2020/09/04 21:30:00".
    #[arg(long, value_parser = parse_window_time)]
    pub start: Option<NaiveDateTime>,

    /// Report window stop, e.g. "2020/09/07 23:00:00".
    #[arg(long, value_parser = parse_window_time)]
    pub stop: Option<NaiveDateTime>,

    /// Report a single night, noon to noon, e.g. "2020/09/08".
    #[arg(short, long, value_parser = parse_night, conflicts_with_all = ["start", "stop"])]
    pub date: Option<NaiveDate>,

    /// Station code from the settings file.
    #[arg(long, env = "VESPER_EBIRD_STATION")]
    pub station: Option<String>,

    /// Export checklists to NAME.csv.
    #[arg(short, long, value_name = "NAME")]
    pub export: Option<String>,

    /// Console report format (text, json).
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Only print warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
