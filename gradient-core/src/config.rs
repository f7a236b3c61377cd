//! Strategy configuration — risk allocation and per-order size fractions.
//!
//! Stored as TOML:
//!
//! ```toml
//! total_risk = 0.5
//! order_sizes = [0.5, 0.25, 0.15, 0.10]
//! ```

use crate::domain::ConfigFingerprint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("order_sizes must contain at least one fraction")]
    EmptyOrderSizes,

    #[error("total_risk must be positive and finite, got {0}")]
    InvalidTotalRisk(f64),

    #[error("order_sizes[{index}] must be non-negative and finite, got {value}")]
    InvalidOrderSize { index: usize, value: f64 },

    #[error("read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Risk allocation for a laddered plan.
///
/// `order_sizes[0]` goes to the entry nearest the current price, so it is
/// conventionally the largest slice. Fractions need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fraction of balance risked across the whole ladder.
    pub total_risk: f64,
    /// Per-order slices of `total_risk`, most aggressive first.
    pub order_sizes: Vec<f64>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            total_risk: 0.5,
            order_sizes: vec![0.5, 0.25, 0.15, 0.10],
        }
    }
}

impl StrategyConfig {
    pub fn new(total_risk: f64, order_sizes: Vec<f64>) -> Self {
        Self {
            total_risk,
            order_sizes,
        }
    }

    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.total_risk.is_finite() || self.total_risk <= 0.0 {
            return Err(ConfigError::InvalidTotalRisk(self.total_risk));
        }
        if self.order_sizes.is_empty() {
            return Err(ConfigError::EmptyOrderSizes);
        }
        if let Some((index, &value)) = self
            .order_sizes
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ConfigError::InvalidOrderSize { index, value });
        }
        Ok(())
    }

    pub fn num_orders(&self) -> usize {
        self.order_sizes.len()
    }

    /// Sum of the size fractions, in declaration order.
    pub fn total_fraction(&self) -> f64 {
        self.order_sizes.iter().sum()
    }

    /// Exact identity of this config: BLAKE3 of its JSON form.
    pub fn fingerprint(&self) -> ConfigFingerprint {
        // json! maps sort their keys, so the encoding is canonical
        let json = serde_json::json!({
            "total_risk": self.total_risk,
            "order_sizes": self.order_sizes,
        });
        ConfigFingerprint::from_bytes(json.to_string().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = StrategyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_orders(), 4);
        assert_eq!(config.total_fraction(), 1.0);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = StrategyConfig::from_toml(
            r#"
total_risk = 0.2
order_sizes = [0.6, 0.4]
"#,
        )
        .unwrap();
        assert_eq!(config.total_risk, 0.2);
        assert_eq!(config.order_sizes, vec![0.6, 0.4]);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = StrategyConfig::from_toml("total_risk = 0.25").unwrap();
        assert_eq!(config.total_risk, 0.25);
        assert_eq!(config.order_sizes, StrategyConfig::default().order_sizes);
    }

    #[test]
    fn test_empty_order_sizes_rejected() {
        let err = StrategyConfig::from_toml("order_sizes = []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyOrderSizes));
    }

    #[test]
    fn test_bad_total_risk_rejected() {
        let err = StrategyConfig::new(0.0, vec![1.0]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTotalRisk(_)));
        let err = StrategyConfig::new(f64::NAN, vec![1.0]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTotalRisk(_)));
    }

    #[test]
    fn test_negative_order_size_rejected_with_index() {
        let err = StrategyConfig::new(0.5, vec![0.5, -0.1]).validate().unwrap_err();
        match err {
            ConfigError::InvalidOrderSize { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, -0.1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = StrategyConfig::from_toml("total_risk = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StrategyConfig::new(0.3, vec![0.7, 0.2, 0.1]);
        let text = config.to_toml().unwrap();
        let back = StrategyConfig::from_toml(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "total_risk = 0.1").unwrap();
        writeln!(file, "order_sizes = [1.0]").unwrap();

        let config = StrategyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.total_risk, 0.1);
        assert_eq!(config.order_sizes, vec![1.0]);
    }

    #[test]
    fn test_from_file_missing_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StrategyConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_fingerprint_tracks_params() {
        let a = StrategyConfig::default();
        let b = StrategyConfig::default();
        let c = StrategyConfig::new(0.4, a.order_sizes.clone());
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
