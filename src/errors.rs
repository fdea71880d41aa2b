use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported while preparing an image configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageConfigError {
    #[error("{0} must be specified")]
    MissingField(&'static str),
}

/// Errors raised while loading an image configuration from outside the process
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON config: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Unsupported config format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid variable assignment '{0}', expected key=value")]
    InvalidVariable(String),
}

/// Result type for loading configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Every error collected by a prepare pass, rendered as a single message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepareErrors {
    errors: Vec<ImageConfigError>,
}

impl PrepareErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ImageConfigError) {
        self.errors.push(error);
    }

    pub fn extend<I: IntoIterator<Item = ImageConfigError>>(&mut self, errors: I) {
        self.errors.extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ImageConfigError] {
        &self.errors
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), PrepareErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ImageConfigError>> for PrepareErrors {
    fn from(errors: Vec<ImageConfigError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for PrepareErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s) occurred:\n", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n* {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for PrepareErrors {}
