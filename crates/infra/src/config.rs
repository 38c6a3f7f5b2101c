//! Environment configuration.

use core::str::FromStr;

use thiserror::Error;
use tracing::debug;

use pharmawatch_inventory::{DEFAULT_EXPIRY_HORIZON_DAYS, HealthConfig};
use pharmawatch_observability::LogFormat;

pub const ENV_EXPIRY_HORIZON_DAYS: &str = "PHARMAWATCH_EXPIRY_HORIZON_DAYS";
pub const ENV_LOG_FORMAT: &str = "PHARMAWATCH_LOG_FORMAT";
pub const ENV_INSIGHT_SEED: &str = "PHARMAWATCH_INSIGHT_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{key}: invalid value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub health: HealthConfig,
    pub log_format: LogFormat,
    /// Seed for the canned insight sampler.
    pub insight_seed: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            health: HealthConfig::default(),
            log_format: LogFormat::default(),
            insight_seed: 0,
        }
    }
}

impl MonitorConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unset keys fall back to defaults;
    /// set-but-malformed keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let horizon = parse_var(&lookup, ENV_EXPIRY_HORIZON_DAYS, |v| {
            u32::from_str(v).map_err(|e| e.to_string())
        })?
        .unwrap_or(DEFAULT_EXPIRY_HORIZON_DAYS);

        let log_format = parse_var(&lookup, ENV_LOG_FORMAT, LogFormat::from_str)?.unwrap_or_default();

        let insight_seed = parse_var(&lookup, ENV_INSIGHT_SEED, |v| {
            u64::from_str(v).map_err(|e| e.to_string())
        })?
        .unwrap_or(0);

        Ok(Self {
            health: HealthConfig::default().with_expiry_horizon_days(horizon),
            log_format,
            insight_seed,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        debug!(key, "not set; using default");
        return Ok(None);
    };
    parse(raw.trim()).map(Some).map_err(|reason| ConfigError {
        key,
        value: raw,
        reason,
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = MonitorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.health.expiry_horizon_days, 30);
    }

    #[test]
    fn reads_all_keys() {
        let config = MonitorConfig::from_lookup(lookup(&[
            (ENV_EXPIRY_HORIZON_DAYS, " 45 "),
            (ENV_LOG_FORMAT, "pretty"),
            (ENV_INSIGHT_SEED, "1234"),
        ]))
        .unwrap();
        assert_eq!(config.health.expiry_horizon_days, 45);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.insight_seed, 1234);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = MonitorConfig::from_lookup(lookup(&[(ENV_EXPIRY_HORIZON_DAYS, "-3")])).unwrap_err();
        assert_eq!(err.key, ENV_EXPIRY_HORIZON_DAYS);
        assert_eq!(err.value, "-3");

        let err = MonitorConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert_eq!(err.key, ENV_LOG_FORMAT);
    }
}
