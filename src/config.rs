//! App configuration: where the dataset and geometry come from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::dataset::DatasetSource;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Relative path the dataset is read from when nothing is configured.
pub const DEFAULT_DATASET_PATH: &str = "dados.json";

/// Geometry resource with the 27 state outlines.
pub const DEFAULT_GEOMETRY_URL: &str =
    "https://raw.githubusercontent.com/codeforamerica/click_that_hood/master/public/data/brazil-states.geojson";

/// Errors while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Application directory could not be resolved.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Reading the config file failed.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The config file was not valid TOML.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User-adjustable settings, all optional with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Local dataset file, used when no URL is configured.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Remote dataset resource; takes precedence over the file path.
    #[serde(default)]
    pub dataset_url: Option<String>,
    /// Geometry resource for the state outlines.
    #[serde(default = "default_geometry_url")]
    pub geometry_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            dataset_url: None,
            geometry_url: default_geometry_url(),
        }
    }
}

impl AppConfig {
    /// Resolve the dataset source the store should load from.
    pub fn dataset_source(&self) -> DatasetSource {
        match &self.dataset_url {
            Some(url) => DatasetSource::Url(url.clone()),
            None => DatasetSource::File(self.dataset_path.clone()),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_geometry_url() -> String {
    DEFAULT_GEOMETRY_URL.to_string()
}

/// Load the config file, propagating failures.
pub fn try_load() -> Result<AppConfig, ConfigError> {
    let path = app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

/// Load the config file, falling back to defaults on any failure.
///
/// A malformed file is logged and ignored so a bad edit never blocks launch.
pub fn load_or_default() -> AppConfig {
    match try_load() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Using default configuration: {error}");
            AppConfig::default()
        }
    }
}
