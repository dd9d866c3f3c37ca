//! Configuration for transition table construction.

use crate::table::MAX_VARIABLES;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on state bits plus input variables (about a million rows).
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_variables {requested} exceeds the supported ceiling of {ceiling}")]
    LimitTooHigh { requested: usize, ceiling: usize },
}

/// Limits applied by [`TransitionTableCreator`](crate::creator::TransitionTableCreator).
///
/// Table size is `2^(state bits + input variables)` rows, so the number of
/// variables is what callers bound.
///
/// # Example
///
/// ```rust
/// use fsm_table::config::CreatorConfig;
///
/// let config = CreatorConfig::from_json(r#"{ "max_variables": 12 }"#).unwrap();
/// assert_eq!(config.variable_limit(), 12);
///
/// let config = CreatorConfig::from_json("{}").unwrap();
/// assert_eq!(config, CreatorConfig::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCreatorConfig")]
pub struct CreatorConfig {
    /// Maximum of state bits plus input variables.
    max_variables: usize,
}

/// Unchecked form of [`CreatorConfig`] as it appears in JSON.
#[derive(Deserialize)]
#[serde(default)]
struct RawCreatorConfig {
    max_variables: usize,
}

impl Default for RawCreatorConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl TryFrom<RawCreatorConfig> for CreatorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCreatorConfig) -> Result<Self, Self::Error> {
        if raw.max_variables > MAX_VARIABLES {
            return Err(ConfigError::LimitTooHigh {
                requested: raw.max_variables,
                ceiling: MAX_VARIABLES,
            });
        }
        Ok(Self {
            max_variables: raw.max_variables,
        })
    }
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl CreatorConfig {
    /// Set the variable limit, capped at the table's hard ceiling.
    pub fn max_variables(mut self, max: usize) -> Self {
        self.max_variables = max.min(MAX_VARIABLES);
        self
    }

    /// Maximum of state bits plus input variables a table may use.
    pub fn variable_limit(&self) -> usize {
        self.max_variables
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawCreatorConfig = serde_json::from_str(text)?;
        CreatorConfig::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_caps_limit() {
        let config = CreatorConfig::default().max_variables(1000);
        assert_eq!(config.variable_limit(), MAX_VARIABLES);
    }

    #[test]
    fn rejects_limit_above_ceiling() {
        let result = CreatorConfig::from_json(r#"{ "max_variables": 64 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::LimitTooHigh { requested: 64, .. })
        ));
    }

    #[test]
    fn plain_deserialization_enforces_ceiling() {
        let result: Result<CreatorConfig, _> = serde_json::from_str(r#"{ "max_variables": 64 }"#);
        assert!(result.is_err());

        let config: CreatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CreatorConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            CreatorConfig::from_json("{ max_variables"),
            Err(ConfigError::Parse(_))
        ));
    }
}
