// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env::{self, VarError};

/// Environment variable loader
///
/// Reads from the process environment by default. Tests build one from an
/// explicit map instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    overrides: Option<HashMap<String, String>>,
}

impl EnvLoader {
    /// Create a loader backed by the process environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader backed by a fixed set of variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Load `.env` from the working directory into the process environment.
    ///
    /// Variables already set are left untouched. A missing file is not an error.
    pub fn load_dotenv(&self) {
        if self.overrides.is_some() {
            return;
        }
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
        }
    }

    /// Load a specific variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        match self.overrides {
            Some(ref vars) => vars
                .get(key)
                .cloned()
                .ok_or(ConfigError::Env(VarError::NotPresent)),
            None => env::var(key).map_err(ConfigError::Env),
        }
    }

    /// Load with default value. Unset and empty variables both yield the default.
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        match self.load_var(key) {
            Ok(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_loader_with_default() {
        let loader = EnvLoader::new();
        let value = loader.load_var_or("CONTENTHOOK_NONEXISTENT_VAR_12345", "default");

        assert_eq!(value, "default");
    }

    #[test]
    fn test_env_loader_missing_var() {
        let loader = EnvLoader::new();
        let result = loader.load_var("CONTENTHOOK_MISSING_VAR_67890");

        assert!(matches!(result, Err(ConfigError::Env(VarError::NotPresent))));
    }

    #[test]
    fn test_from_vars() {
        let loader = EnvLoader::from_vars([("FOO", "bar")]);

        assert_eq!(loader.load_var("FOO").unwrap(), "bar");
        assert!(loader.load_var("PATH").is_err());
    }

    #[test]
    fn test_empty_value_falls_back() {
        let loader = EnvLoader::from_vars([("FOO", "")]);

        assert_eq!(loader.load_var_or("FOO", "fallback"), "fallback");
    }
}
