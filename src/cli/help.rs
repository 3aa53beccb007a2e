//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;
use std::path::Path;

/// Print help message based on configuration state.
pub fn print_smart_help(config: &Config, settings: &Path) {
    print!("{}", smart_help(config, settings));
}

fn smart_help(config: &Config, settings: &Path) -> String {
    if config.stations.is_empty() {
        first_time_help(settings)
    } else {
        configured_help(config)
    }
}

fn first_time_help(settings: &Path) -> String {
    format!(
        "No stations configured. Get started with vesper-ebird:

1. Create a settings file:
   vesper-ebird config init

2. Add your station to {}:
   [stations.NBNC]
   location_name = \"My Yard--NFC station\"
   latitude = 44.26
   longitude = -72.58
   state = \"VT\"
   kit = \"Microphone in a bucket.\"

3. Export clips from Vesper and report them:
   vesper-ebird clips.csv --date 2020/09/08

Run 'vesper-ebird -h' for all options.
",
        settings.display()
    )
}

fn configured_help(config: &Config) -> String {
    let stations: Vec<&str> = config.stations.keys().map(String::as_str).collect();
    format!(
        "Usage: vesper-ebird [FILES]... [OPTIONS]

Example: vesper-ebird clips.csv --start \"2020/09/04 21:30:00\" --stop \"2020/09/05 05:00:00\" -e checklists

Stations: {} (default {})
Run 'vesper-ebird -h' for all options.
",
        stations.join(", "),
        config.defaults.station
    )
}
