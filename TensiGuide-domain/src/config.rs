//! Aggregator configuration, read from the environment

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable selecting the crisis tier precedence
pub const CRISIS_PRECEDENCE_VAR: &str = "BP_CRISIS_PRECEDENCE";

/// Environment variable selecting the trend window policy
pub const TREND_POLICY_VAR: &str = "TREND_POLICY";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set to a value that is not understood
    #[error("Invalid value {value:?} for {name}: expected one of {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Where the hypertensive crisis tier sits in the classification order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrisisPrecedence {
    /// Crisis is checked before every other tier
    #[default]
    SeverityFirst,
    /// Tiers are checked in the legacy order; Stage 2 shadows crisis, so
    /// crisis is never reported
    SourceOrder,
}

impl FromStr for CrisisPrecedence {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "severity-first" | "severity" => Ok(CrisisPrecedence::SeverityFirst),
            "source-order" | "source" => Ok(CrisisPrecedence::SourceOrder),
            _ => Err(ConfigError::InvalidValue {
                name: CRISIS_PRECEDENCE_VAR,
                value: s.to_string(),
                expected: "severity-first, source-order",
            }),
        }
    }
}

/// How the systolic trend handles fewer than six readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendPolicy {
    /// Compare the partial windows that exist once two readings are available
    #[default]
    PartialWindows,
    /// Report stable until two full windows of three readings exist
    FullWindowsOnly,
}

impl FromStr for TrendPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partial" | "partial-windows" => Ok(TrendPolicy::PartialWindows),
            "full" | "full-windows-only" => Ok(TrendPolicy::FullWindowsOnly),
            _ => Err(ConfigError::InvalidValue {
                name: TREND_POLICY_VAR,
                value: s.to_string(),
                expected: "partial, full",
            }),
        }
    }
}

/// Tunable behaviour of the health aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub crisis_precedence: CrisisPrecedence,
    pub trend_policy: TrendPolicy,
}

impl AggregatorConfig {
    /// Build the configuration from environment variables, using defaults
    /// for unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let crisis_precedence = match lookup(CRISIS_PRECEDENCE_VAR) {
            Some(value) => value.parse()?,
            None => CrisisPrecedence::default(),
        };
        let trend_policy = match lookup(TREND_POLICY_VAR) {
            Some(value) => value.parse()?,
            None => TrendPolicy::default(),
        };

        let config = Self { crisis_precedence, trend_policy };
        debug!(?config, "Aggregator configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AggregatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.crisis_precedence, CrisisPrecedence::SeverityFirst);
        assert_eq!(config.trend_policy, TrendPolicy::PartialWindows);
    }

    #[test]
    fn test_explicit_values() {
        let config = AggregatorConfig::from_lookup(lookup_from(&[
            (CRISIS_PRECEDENCE_VAR, "Source-Order"),
            (TREND_POLICY_VAR, "full"),
        ]))
        .unwrap();
        assert_eq!(config.crisis_precedence, CrisisPrecedence::SourceOrder);
        assert_eq!(config.trend_policy, TrendPolicy::FullWindowsOnly);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = AggregatorConfig::from_lookup(lookup_from(&[(TREND_POLICY_VAR, "weekly")])).unwrap_err();
        assert!(err.to_string().contains("TREND_POLICY"));
        assert!(err.to_string().contains("weekly"));
    }
}
