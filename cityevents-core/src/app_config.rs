//! Application configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CityEventsError, CityEventsResult};
use crate::event::DEFAULT_DURATION_HOURS;

static DEFAULT_DATA_FILE: &str = "events.data";

/// Prefix for environment overrides, e.g. `CITYEVENTS_DATA_FILE`.
const ENV_PREFIX: &str = "CITYEVENTS";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_duration_hours() -> u32 {
    DEFAULT_DURATION_HOURS
}

fn default_description_preview() -> usize {
    50
}

/// Configuration at ~/.config/cityevents/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Events data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Duration used when none is entered while registering an event.
    #[serde(default = "default_duration_hours")]
    pub default_duration_hours: u32,

    /// How many characters of a description the event list shows.
    #[serde(default = "default_description_preview")]
    pub description_preview: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: default_data_file(),
            default_duration_hours: default_duration_hours(),
            description_preview: default_description_preview(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> CityEventsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CityEventsError::Config("Could not determine config directory".into()))?
            .join("cityevents");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// there on first run.
    pub fn load() -> CityEventsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path, false)
    }

    /// Load from `path`, then apply `CITYEVENTS_*` environment overrides.
    pub fn load_from(path: &Path, required: bool) -> CityEventsResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| CityEventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CityEventsError::Config(e.to_string()))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CityEventsResult<()> {
        let contents = format!(
            "\
# cityevents configuration

# Where events are stored (relative to the working directory unless absolute):
# data_file = \"{}\"

# Hours assumed when no duration is entered:
# default_duration_hours = {}

# Characters of description shown in the event list:
# description_preview = {}
",
            DEFAULT_DATA_FILE,
            default_duration_hours(),
            default_description_preview(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CityEventsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CityEventsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
