use log::debug;
use std::collections::HashMap;
use std::ffi::OsString;

use crate::errors::{ConfigError, ConfigResult};
use crate::models::interpolate::InterpolationContext;

/// Environment variables with this prefix become user variables
pub const ENV_VAR_PREFIX: &str = "PKR_VAR_";

/// Where the host gathers user variables from before a build
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// `key=value` assignments, applied after the environment
    pub vars: Vec<String>,
    pub build_name: Option<String>,
    pub template_path: Option<String>,
}

/// Split a `key=value` assignment. The value may itself contain `=`.
pub fn parse_var(assignment: &str) -> ConfigResult<(String, String)> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidVariable(assignment.to_string())),
    }
}

/// Collect user variables from `PKR_VAR_<name>` entries. Entries that are
/// not valid UTF-8 are skipped.
pub fn vars_from_env<I, K, V>(env: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    env.into_iter()
        .filter_map(|(key, value)| {
            let key: OsString = key.into();
            let value: OsString = value.into();
            let (key, value) = match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => (key, value),
                (key, _) => {
                    debug!("Skipping non UTF-8 environment entry {:?}", key);
                    return None;
                }
            };
            key.strip_prefix(ENV_VAR_PREFIX)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value))
        })
        .collect()
}

impl ContextOptions {
    /// Build a context from the given environment and the explicit assignments
    pub fn build_context<I, K, V>(&self, env: I) -> ConfigResult<InterpolationContext>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut user_variables = vars_from_env(env);
        for assignment in &self.vars {
            let (key, value) = parse_var(assignment)?;
            user_variables.insert(key, value);
        }
        debug!("Interpolation context has {} user variable(s)", user_variables.len());

        Ok(InterpolationContext {
            user_variables,
            build_name: self.build_name.clone(),
            build_type: Some("ecs".to_string()),
            template_path: self.template_path.clone(),
        })
    }

    /// Load `.env` if present, then build a context from the process environment
    pub fn build_context_from_env(&self) -> ConfigResult<InterpolationContext> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        self.build_context(std::env::vars_os())
    }
}
