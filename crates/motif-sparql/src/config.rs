//! Search configuration.

use crate::endpoint::Endpoint;
use crate::error::FinderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENDPOINT_ENV: &str = "MOTIF_SPARQL_ENDPOINT";
pub const DATASET_ENV: &str = "MOTIF_SPARQL_DATASET";
pub const THRESHOLD_ENV: &str = "MOTIF_THRESHOLD";
pub const WORKER_THREADS_ENV: &str = "MOTIF_WORKER_THREADS";
pub const TIMEOUT_SECS_ENV: &str = "MOTIF_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://dbpedia.org/sparql";

/// Frontier search configuration, loadable from the environment or any serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub endpoint: String,
    pub dataset: Option<String>,
    /// Maximum number of accepted entries per derivation.
    pub threshold: usize,
    /// Size of the shared role-query worker pool.
    pub worker_threads: usize,
    /// Per-query timeout; a timeout counts as the endpoint being unavailable.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dataset: None,
            threshold: 100,
            worker_threads: 4,
            timeout_secs: 30,
            user_agent: concat!("motif/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Endpoint(#[from] FinderError),
}

impl From<ConfigError> for FinderError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Endpoint(inner) => inner,
            ConfigError::Invalid(msg) => FinderError::Setup(msg),
        }
    }
}

impl FinderConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(endpoint) = get(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        config.dataset = get(DATASET_ENV);
        if let Some(v) = get(THRESHOLD_ENV) {
            config.threshold = parse_number(THRESHOLD_ENV, &v)?;
        }
        if let Some(v) = get(WORKER_THREADS_ENV) {
            config.worker_threads = parse_number(WORKER_THREADS_ENV, &v)?;
        }
        if let Some(v) = get(TIMEOUT_SECS_ENV) {
            config.timeout_secs = parse_number(TIMEOUT_SECS_ENV, &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold == 0 {
            return Err(ConfigError::Invalid("threshold must be > 0".to_string()));
        }
        if self.worker_threads == 0 {
            return Err(ConfigError::Invalid(
                "worker_threads must be >= 1".to_string(),
            ));
        }
        Endpoint::parse(&self.endpoint)?;
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = FinderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FinderConfig::default());
        assert!(config.user_agent.starts_with("motif/"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = FinderConfig::from_lookup(lookup(&[
            (ENDPOINT_ENV, "http://localhost:8890/sparql"),
            (DATASET_ENV, "http://dbpedia.org"),
            (THRESHOLD_ENV, "250"),
            (WORKER_THREADS_ENV, "8"),
            (TIMEOUT_SECS_ENV, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8890/sparql");
        assert_eq!(config.dataset.as_deref(), Some("http://dbpedia.org"));
        assert_eq!(config.threshold, 250);
        assert_eq!(config.worker_threads, 8);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            FinderConfig::from_lookup(lookup(&[(THRESHOLD_ENV, "many")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            FinderConfig::from_lookup(lookup(&[(THRESHOLD_ENV, "0")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            FinderConfig::from_lookup(lookup(&[(ENDPOINT_ENV, "dbpedia")])),
            Err(ConfigError::Endpoint(FinderError::InvalidEndpoint { .. }))
        ));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: FinderConfig =
            serde_json::from_str(r#"{ "endpoint": "http://localhost/sparql", "threshold": 7 }"#)
                .unwrap();
        assert_eq!(config.threshold, 7);
        assert_eq!(config.worker_threads, 4);
        assert!(config.validate().is_ok());
    }
}
