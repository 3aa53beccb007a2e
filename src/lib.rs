//! vesper-ebird - Vesper nocturnal flight call detections to eBird checklists.
//!
//! Detections exported from Vesper are grouped into hourly buckets per
//! recording night, tallied per species, and written out as eBird
//! record-format checklists.

#![warn(missing_docs)]

pub mod bucket;
pub mod cli;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod session;
pub mod taxonomy;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, ReportArgs};
use config::{
    Config, build_window, get_station, load_config_file, resolve_settings_path, save_config,
    validate_config,
};
use input::{read_detection_files, report_dates};
use output::{Report, checklist_rows, export_path, render_json, render_text, write_checklists};
use session::SessionIndex;
use std::path::{Path, PathBuf};
use taxonomy::Taxonomy;
use tracing::{debug, info, warn};

pub use error::{Error, Result};

/// Main entry point for the vesper-ebird CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.report.verbose, cli.report.quiet);

    let settings = resolve_settings_path(cli.report.config.as_deref())?;
    debug!(path = %settings.display(), "using settings file");

    if let Some(command) = cli.command {
        return handle_command(command, &settings);
    }

    let config = load_config_file(&settings)?;
    validate_config(&config)?;

    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&config, &settings);
        return Ok(());
    }

    report_files(&cli.inputs, &cli.report, &config)
}

/// Bucket, tally and report detections from the given clip exports.
fn report_files(inputs: &[PathBuf], args: &ReportArgs, config: &Config) -> Result<()> {
    // Bad bounds or export names fail before any file is read.
    let window = build_window(args.start, args.stop, args.date)?;
    let export = args.export.as_deref().map(export_path).transpose()?;
    let station_code = args
        .station
        .clone()
        .unwrap_or_else(|| config.defaults.station.clone());
    if export.is_some() {
        get_station(config, &station_code)?;
    }

    if let Some(window) = &window {
        info!("Reporting window: {window}");
    }

    let events = read_detection_files(inputs)?;
    info!("Read {} detection(s) from {} file(s)", events.len(), inputs.len());

    let sessions = SessionIndex::from_events(&events);
    let dates = report_dates(&events, window.as_ref());
    debug!(sessions = sessions.len(), dates = dates.len(), "building buckets");

    let mut buckets = bucket::build_skeleton(&dates, &sessions, window.as_ref());
    let summary = bucket::populate(&mut buckets, events, window.as_ref());
    info!(
        "Assigned {} detection(s) to {} bucket(s) ({} outside window, {} unmatched)",
        summary.assigned,
        buckets.len(),
        summary.outside_window,
        summary.unmatched
    );

    let taxonomy = Taxonomy::default();
    let report = Report::build(&buckets, window.as_ref(), &taxonomy);
    if report.is_empty() {
        warn!("No detections fell inside any bucket");
    }

    print_report(&report, args, config, &taxonomy)?;

    if let Some(path) = export {
        export_checklists(&path, &report, config, &station_code, &taxonomy)?;
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_report(report: &Report, args: &ReportArgs, config: &Config, taxonomy: &Taxonomy) -> Result<()> {
    let format = args.format.unwrap_or(config.defaults.format);
    match format {
        config::ReportFormat::Text => print!("{}", render_text(report, taxonomy)),
        config::ReportFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}

fn export_checklists(
    path: &Path,
    report: &Report,
    config: &Config,
    station_code: &str,
    taxonomy: &Taxonomy,
) -> Result<()> {
    let station = get_station(config, station_code)?;
    let rows = checklist_rows(report, station, config, taxonomy);
    write_checklists(path, &rows)?;
    info!("Wrote {} checklist row(s) to {}", rows.len(), path.display());
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr so JSON reports on stdout stay parseable.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, settings: &Path) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, settings),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, settings: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            if settings.exists() {
                println!("Configuration file already exists: {}", settings.display());
            } else {
                save_config(&Config::default(), settings)?;
                println!("Created configuration file: {}", settings.display());
                println!("\nNext steps:");
                println!("  Add a [stations.<CODE>] table with your eBird location details.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config_file(settings)?;
            validate_config(&config)?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", settings.display());
            Ok(())
        }
    }
}
