//! Settings file location.

use crate::constants::{APP_NAME, SETTINGS_ENV_VAR};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/vesper-ebird/`
/// - macOS: `~/Library/Application Support/vesper-ebird/`
/// - Windows: `%APPDATA%\vesper-ebird\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the default config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Resolve the settings file for this run.
///
/// Order: the settings environment variable, the `--config` flag, then the
/// platform default.
pub fn resolve_settings_path(flag: Option<&Path>) -> Result<PathBuf> {
    choose_settings_path(std::env::var_os(SETTINGS_ENV_VAR), flag, config_file_path)
}

fn choose_settings_path(
    env: Option<OsString>,
    flag: Option<&Path>,
    default: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    if let Some(env) = env.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(env));
    }
    if let Some(flag) = flag {
        return Ok(flag.to_path_buf());
    }
    default()
}
