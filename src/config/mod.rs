//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;
mod window;

pub use file::{load_config_file, save_config};
pub use paths::{config_dir, config_file_path, resolve_settings_path};
pub use types::{Config, DefaultsConfig, ReportFormat, SpeciesComment, Station};
pub use validate::{get_station, validate_config};
pub use window::build_window;
