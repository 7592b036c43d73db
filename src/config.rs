//! Configuration for the settlement core
//!
//! Centralized configuration with defaults, TOML file loading, environment
//! variable overrides, and validation before use.

use crate::errors::SettlementError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Settlement configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementConfig {
    /// Decimal places for payout rounding
    #[serde(default = "default_payout_decimals")]
    pub payout_decimals: u32,
    /// Optional path to a JSON bet-catalog export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

fn default_payout_decimals() -> u32 {
    2
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            payout_decimals: 2,
            catalog_path: None,
        }
    }
}

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> Result<SettlementConfig, SettlementError> {
        let mut config = if let Some(ref path) = self.config_path {
            self.load_from_file(path)?
        } else {
            SettlementConfig::default()
        };

        self.apply_env_overrides(&mut config)?;
        self.validate(&config)?;

        Ok(config)
    }

    fn load_from_file(&self, path: &str) -> Result<SettlementConfig, SettlementError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettlementError::Configuration(format!("failed to read {}: {}", path, e))
        })?;

        toml::from_str(&content)
            .map_err(|e| SettlementError::Configuration(format!("failed to parse TOML: {}", e)))
    }

    fn apply_env_overrides(&self, config: &mut SettlementConfig) -> Result<(), SettlementError> {
        if let Ok(value) = env::var("CROUPIER_PAYOUT_DECIMALS") {
            config.payout_decimals = value.parse().map_err(|_| {
                SettlementError::Configuration(format!(
                    "invalid CROUPIER_PAYOUT_DECIMALS: '{}'",
                    value
                ))
            })?;
        }

        if let Ok(value) = env::var("CROUPIER_CATALOG_PATH") {
            config.catalog_path = Some(value);
        }

        Ok(())
    }

    fn validate(&self, config: &SettlementConfig) -> Result<(), SettlementError> {
        if config.payout_decimals > 8 {
            return Err(SettlementError::Configuration(format!(
                "payout_decimals {} exceeds maximum of 8",
                config.payout_decimals
            )));
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SettlementConfig::default();
        assert_eq!(config.payout_decimals, 2);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, SettlementConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ConfigLoader::new().with_path("/nonexistent/croupier.toml").load();
        assert!(matches!(result, Err(SettlementError::Configuration(_))));
    }

    #[test]
    fn test_validation_rejects_excessive_precision() {
        let loader = ConfigLoader::new();
        let config = SettlementConfig {
            payout_decimals: 9,
            catalog_path: None,
        };
        assert!(loader.validate(&config).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SettlementConfig {
            payout_decimals: 4,
            catalog_path: Some("catalog.json".to_string()),
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: SettlementConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
