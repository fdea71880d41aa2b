use log::debug;
use std::fs;
use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};
use crate::models::image::ImageConfig;

/// Input formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl ImageConfig {
    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading image config from {} as {:?}", path.display(), format);

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            ConfigFormat::Json => Self::from_json_str(&contents),
            ConfigFormat::Yaml => Self::from_yaml_str(&contents),
        }
    }

    pub fn from_yaml_str(contents: &str) -> ConfigResult<Self> {
        let config: ImageConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> ConfigResult<Self> {
        let config: ImageConfig = serde_json::from_str(contents)?;
        Ok(config)
    }
}
