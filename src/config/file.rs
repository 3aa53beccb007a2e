//! Configuration file loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::ReportFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path).unwrap();
        assert!(config.stations.is_empty());
        assert_eq!(config.defaults.station, "NBNC");
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
station = "MSGR"
format = "json"

[stations.MSGR]
location_name = "Middlesex Ridge"
latitude = 44.3
longitude = -72.7
state = "VT"
kit = "Microphone on a pole."

[species.SWTH]
text = "A rising whistle."
example = "https://ebird.org/checklist/S1"

[slash_codes]
"TSEEP" = "passerine sp."
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.defaults.station, "MSGR");
        assert_eq!(config.defaults.format, ReportFormat::Json);
        assert_eq!(config.stations["MSGR"].latitude, 44.3);
        assert!(!config.species["SWTH"].wip);
        assert_eq!(config.slash_codes["TSEEP"], "passerine sp.");
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(matches!(config, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.station = "MSGR".to_string();
        save_config(&config, &path).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.defaults.station, "MSGR");
    }
}
