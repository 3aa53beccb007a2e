//! Configuration validation.

use crate::config::{Config, Station};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    for (code, station) in &config.stations {
        validate_station(code, station)?;
    }
    Ok(())
}

fn validate_station(code: &str, station: &Station) -> Result<()> {
    if !(-90.0..=90.0).contains(&station.latitude) {
        return Err(Error::ConfigValidation {
            message: format!(
                "station {code}: latitude must be between -90.0 and 90.0, got {}",
                station.latitude
            ),
        });
    }

    if !(-180.0..=180.0).contains(&station.longitude) {
        return Err(Error::ConfigValidation {
            message: format!(
                "station {code}: longitude must be between -180.0 and 180.0, got {}",
                station.longitude
            ),
        });
    }

    Ok(())
}

/// Get a station by code from the config.
pub fn get_station<'a>(config: &'a Config, code: &str) -> Result<&'a Station> {
    config.stations.get(code).ok_or_else(|| Error::StationNotFound {
        name: code.to_string(),
    })
}
