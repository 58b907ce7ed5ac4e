//! Allocation — per-asset-class slice of the portfolio, plus the target
//! allocation maps it is compared against.

use super::asset_class::AssetClass;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One asset class's share of the portfolio.
///
/// Produced by the allocation calculator with `target_percent` and
/// `deviation` zeroed; the deviation analyzer fills both in from a
/// [`TargetAllocation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub asset_class: AssetClass,
    /// Sum of quantity x current price over holdings of this class.
    pub current_value: f64,
    /// Share of total portfolio value, in percent (0-100).
    pub current_percent: f64,
    /// Target share in percent; 0 when the class is absent from the map.
    pub target_percent: f64,
    /// Signed gap: current_percent - target_percent.
    pub deviation: f64,
}

/// Target allocation map: asset class -> target percent (0-100).
///
/// The named strategies are just preset instances of this map; a custom
/// map goes through [`TargetAllocation::new`], which validates entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetAllocation {
    weights: BTreeMap<AssetClass, f64>,
}

impl TargetAllocation {
    /// Build a custom target map. Rejects negative or >100 percentages;
    /// silently clamping a bad target would miscalculate every downstream
    /// trade.
    pub fn new(weights: BTreeMap<AssetClass, f64>) -> Result<Self, ConfigError> {
        for (&class, &percent) in &weights {
            if !(0.0..=100.0).contains(&percent) || percent.is_nan() {
                return Err(ConfigError::InvalidTargetPercent { class, percent });
            }
        }
        Ok(Self { weights })
    }

    /// Capital-preservation preset: bond and fund heavy.
    pub fn conservative() -> Self {
        Self::preset(&[
            (AssetClass::Eurobond, 40.0),
            (AssetClass::Fund, 30.0),
            (AssetClass::Stock, 15.0),
            (AssetClass::Commodity, 10.0),
            (AssetClass::Currency, 5.0),
        ])
    }

    /// Middle-of-the-road preset.
    pub fn balanced() -> Self {
        Self::preset(&[
            (AssetClass::Stock, 35.0),
            (AssetClass::Fund, 25.0),
            (AssetClass::Eurobond, 20.0),
            (AssetClass::Commodity, 10.0),
            (AssetClass::Crypto, 5.0),
            (AssetClass::Currency, 5.0),
        ])
    }

    /// Growth preset: equity and crypto heavy.
    pub fn aggressive() -> Self {
        Self::preset(&[
            (AssetClass::Stock, 50.0),
            (AssetClass::Crypto, 25.0),
            (AssetClass::Fund, 10.0),
            (AssetClass::Commodity, 10.0),
            (AssetClass::Currency, 5.0),
        ])
    }

    fn preset(entries: &[(AssetClass, f64)]) -> Self {
        Self {
            weights: entries.iter().copied().collect(),
        }
    }

    /// Target percent for a class; 0 when absent from the map.
    pub fn percent_for(&self, class: AssetClass) -> f64 {
        self.weights.get(&class).copied().unwrap_or(0.0)
    }

    /// Classes named by the map, in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = AssetClass> + '_ {
        self.weights.keys().copied()
    }

    /// Sum of all target percentages.
    pub fn total_percent(&self) -> f64 {
        self.weights.values().sum()
    }
}
