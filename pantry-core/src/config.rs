//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::session::DEFAULT_AUTH_DELAY;
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryConfig {
    /// Seed file replacing the built-in dataset.
    pub seed_path: Option<PathBuf>,
    /// Simulated latency of the demo authenticator.
    pub auth_delay: Duration,
    /// Number of ingredient suggestions offered.
    pub suggestion_limit: usize,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            auth_delay: DEFAULT_AUTH_DELAY,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl PantryConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PANTRY_SEED_PATH`: JSON seed file (default: built-in data)
    /// - `PANTRY_AUTH_DELAY_MS`: demo sign-in latency (default: 1000)
    /// - `PANTRY_SUGGESTION_LIMIT`: suggestions shown (default: 15)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`PantryConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_path = lookup("PANTRY_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let auth_delay = match lookup("PANTRY_AUTH_DELAY_MS") {
            Some(v) => Duration::from_millis(parse_number("PANTRY_AUTH_DELAY_MS", &v)?),
            None => defaults.auth_delay,
        };

        let suggestion_limit = match lookup("PANTRY_SUGGESTION_LIMIT") {
            Some(v) => parse_number("PANTRY_SUGGESTION_LIMIT", &v)?,
            None => defaults.suggestion_limit,
        };

        Ok(Self {
            seed_path,
            auth_delay,
            suggestion_limit,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PantryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PantryConfig::default());
        assert_eq!(config.auth_delay, Duration::from_millis(1000));
        assert_eq!(config.suggestion_limit, 15);
    }

    #[test]
    fn test_overrides() {
        let config = PantryConfig::from_lookup(lookup(&[
            ("PANTRY_SEED_PATH", "/tmp/seed.json"),
            ("PANTRY_AUTH_DELAY_MS", "0"),
            ("PANTRY_SUGGESTION_LIMIT", " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert!(config.auth_delay.is_zero());
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn test_invalid_number() {
        let err = PantryConfig::from_lookup(lookup(&[("PANTRY_AUTH_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PANTRY_AUTH_DELAY_MS",
                value: "soon".to_string()
            }
        );
    }
}
