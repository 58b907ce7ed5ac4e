//! Engine configuration — validated knobs for the analytics operations.
//!
//! The config is plain serde data so a host can load it from TOML.
//! Validation is strict: a negative fee or a zero iteration count is a
//! caller bug and gets a typed error, never a silent clamp.

use crate::domain::{AssetClass, TargetAllocation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target percent for {class} must be within 0-100, got {percent}")]
    InvalidTargetPercent { class: AssetClass, percent: f64 },

    #[error("fee percent must be non-negative, got {fee_percent}")]
    InvalidFeePercent { fee_percent: f64 },

    #[error("iteration count must be at least 1")]
    InvalidIterations,

    #[error("volatility for {class} must be non-negative, got {volatility}")]
    InvalidVolatility { class: AssetClass, volatility: f64 },

    #[error("parse engine config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Tunable parameters shared by the analytics operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Transaction fee applied to generated trade amounts, in percent.
    pub fee_percent: f64,
    /// Monte Carlo iteration count.
    pub iterations: usize,
    /// Annual risk-free rate as a fraction (0.05 = 5%), for Sharpe ratios.
    pub risk_free_rate: f64,
    /// Per-class annualized volatility overrides, in percent. Classes not
    /// listed fall back to [`AssetClass::default_volatility`].
    pub volatility: BTreeMap<AssetClass, f64>,
    /// Optional custom target map; `None` means the caller picks a preset.
    pub targets: Option<BTreeMap<AssetClass, f64>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_percent: 0.1,
            iterations: 1000,
            risk_free_rate: 0.05,
            volatility: BTreeMap::new(),
            targets: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every knob; returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_percent < 0.0 || self.fee_percent.is_nan() {
            return Err(ConfigError::InvalidFeePercent {
                fee_percent: self.fee_percent,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        for (&class, &volatility) in &self.volatility {
            if volatility < 0.0 || volatility.is_nan() {
                return Err(ConfigError::InvalidVolatility { class, volatility });
            }
        }
        if let Some(targets) = &self.targets {
            // TargetAllocation::new performs the range checks.
            TargetAllocation::new(targets.clone())?;
        }
        Ok(())
    }

    /// The custom target map, if one was configured.
    pub fn target_allocation(&self) -> Result<Option<TargetAllocation>, ConfigError> {
        self.targets
            .clone()
            .map(TargetAllocation::new)
            .transpose()
    }
}
