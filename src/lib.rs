pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::ContextOptions;
pub use errors::{ConfigError, ConfigResult, ImageConfigError, PrepareErrors};
pub use implementations::config::ConfigFormat;
pub use models::{ImageConfig, InterpolationContext};
pub use traits::Prepare;
