//! Scenario types — price-shock maps and what-if projection results.

use super::asset_class::AssetClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-asset-class price shock, in percent (e.g. -30 means a 30% drop).
///
/// The named presets are fixed instances of this map; classes absent
/// from the map are treated as unchanged (0%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScenarioShock {
    changes: BTreeMap<AssetClass, f64>,
}

impl ScenarioShock {
    pub fn new(changes: BTreeMap<AssetClass, f64>) -> Self {
        Self { changes }
    }

    /// Broad market crash led by risk assets.
    pub fn crisis() -> Self {
        Self::preset(&[
            (AssetClass::Stock, -30.0),
            (AssetClass::Crypto, -50.0),
            (AssetClass::Fund, -20.0),
            (AssetClass::Commodity, -10.0),
            (AssetClass::Eurobond, -5.0),
            (AssetClass::Currency, 0.0),
        ])
    }

    /// Risk-on rally.
    pub fn boom() -> Self {
        Self::preset(&[
            (AssetClass::Stock, 25.0),
            (AssetClass::Crypto, 60.0),
            (AssetClass::Fund, 15.0),
            (AssetClass::Commodity, 10.0),
            (AssetClass::Eurobond, 2.0),
            (AssetClass::Currency, 0.0),
        ])
    }

    /// Commodities up, bonds and cash eroded.
    pub fn inflation() -> Self {
        Self::preset(&[
            (AssetClass::Commodity, 20.0),
            (AssetClass::Crypto, 5.0),
            (AssetClass::Fund, -5.0),
            (AssetClass::Stock, -10.0),
            (AssetClass::Currency, -10.0),
            (AssetClass::Eurobond, -15.0),
        ])
    }

    /// Growth slowdown, flight to quality.
    pub fn recession() -> Self {
        Self::preset(&[
            (AssetClass::Stock, -20.0),
            (AssetClass::Crypto, -35.0),
            (AssetClass::Fund, -15.0),
            (AssetClass::Commodity, -5.0),
            (AssetClass::Eurobond, 5.0),
            (AssetClass::Currency, 5.0),
        ])
    }

    /// Stagnant growth with rising commodity prices.
    pub fn stagflation() -> Self {
        Self::preset(&[
            (AssetClass::Commodity, 15.0),
            (AssetClass::Stock, -15.0),
            (AssetClass::Crypto, -25.0),
            (AssetClass::Fund, -10.0),
            (AssetClass::Eurobond, -10.0),
            (AssetClass::Currency, -5.0),
        ])
    }

    fn preset(entries: &[(AssetClass, f64)]) -> Self {
        Self {
            changes: entries.iter().copied().collect(),
        }
    }

    /// Price change percent for a class; 0 when absent.
    pub fn change_for(&self, class: AssetClass) -> f64 {
        self.changes.get(&class).copied().unwrap_or(0.0)
    }
}

/// Projected effect of a scenario on one holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetImpact {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub current_value: f64,
    pub projected_value: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Portfolio-level projection for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub current_value: f64,
    pub projected_value: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Per-holding impacts, in the order the holdings were supplied.
    pub impacts: Vec<AssetImpact>,
}
