//! Runtime settings for the command line tool, read from the environment.
//!
//! `.env` is loaded first (see `main.rs`), so every variable can also live there.

use crate::boolean_algebra::MAX_TRUTH_TABLE_VARS;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_LOG_CONFIG: &str = "CALCKIT_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CALCKIT_LOG_LEVEL";
pub const ENV_TRUTH_TABLE_MAX_VARS: &str = "CALCKIT_TRUTH_TABLE_MAX_VARS";

/// A setting that is present but unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a log level")]
    InvalidLevel { key: &'static str, value: String },

    #[error("{key}={value:?} is not a whole number")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key}={value} exceeds the limit of {limit}")]
    AboveLimit {
        key: &'static str,
        value: usize,
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Root level for the built-in console logger when no log4rs file is found.
    pub log_level: LevelFilter,
    /// Largest truth table the CLI will print.
    pub truth_table_max_vars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Warn,
            truth_table_max_vars: 12,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            cfg.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            cfg.log_level =
                LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLevel {
                    key: ENV_LOG_LEVEL,
                    value: level.clone(),
                })?;
        }
        if let Some(max) = lookup(ENV_TRUTH_TABLE_MAX_VARS) {
            let n: usize = max.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: ENV_TRUTH_TABLE_MAX_VARS,
                value: max.clone(),
            })?;
            if n > MAX_TRUTH_TABLE_VARS {
                return Err(ConfigError::AboveLimit {
                    key: ENV_TRUTH_TABLE_MAX_VARS,
                    value: n,
                    limit: MAX_TRUTH_TABLE_VARS,
                });
            }
            cfg.truth_table_max_vars = n;
        }

        log::trace!("config: {cfg:?}");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = load(&[
            (ENV_LOG_CONFIG, "/etc/calckit/log.yml"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_TRUTH_TABLE_MAX_VARS, "4"),
        ])
        .unwrap();
        assert_eq!(cfg.log_config, PathBuf::from("/etc/calckit/log.yml"));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.truth_table_max_vars, 4);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[(ENV_LOG_LEVEL, "loud")]),
            Err(ConfigError::InvalidLevel {
                key: ENV_LOG_LEVEL,
                value: "loud".to_string(),
            })
        );
        assert!(matches!(
            load(&[(ENV_TRUTH_TABLE_MAX_VARS, "many")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        let err = load(&[(ENV_TRUTH_TABLE_MAX_VARS, "17")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AboveLimit {
                key: ENV_TRUTH_TABLE_MAX_VARS,
                value: 17,
                limit: MAX_TRUTH_TABLE_VARS,
            }
        );
        assert_eq!(err.to_string(), "CALCKIT_TRUTH_TABLE_MAX_VARS=17 exceeds the limit of 16");
    }
}
