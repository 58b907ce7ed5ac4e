//! Asset class — the coarse instrument category used as the unit of
//! target allocation, shocks, and volatility assumptions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse instrument category.
///
/// Every holding carries exactly one asset class; target allocations,
/// scenario shocks, and Monte Carlo volatilities are all keyed by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Crypto,
    Fund,
    Eurobond,
    Currency,
    Commodity,
}

impl AssetClass {
    /// All classes, in canonical order.
    pub const ALL: [AssetClass; 6] = [
        AssetClass::Stock,
        AssetClass::Crypto,
        AssetClass::Fund,
        AssetClass::Eurobond,
        AssetClass::Currency,
        AssetClass::Commodity,
    ];

    /// Default annualized volatility assumption, in percent.
    ///
    /// Used by the Monte Carlo simulator when the caller supplies no
    /// per-class override.
    pub fn default_volatility(self) -> f64 {
        match self {
            AssetClass::Stock => 20.0,
            AssetClass::Crypto => 50.0,
            AssetClass::Fund => 10.0,
            AssetClass::Eurobond => 5.0,
            AssetClass::Currency => 15.0,
            AssetClass::Commodity => 25.0,
        }
    }

    /// Placeholder symbol used when a trade must reference a class the
    /// portfolio holds nothing in yet (e.g. `STOCK_INDEX`).
    pub fn index_symbol(self) -> String {
        format!("{}_INDEX", self.as_str().to_uppercase())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetClass::Stock => "stock",
            AssetClass::Crypto => "crypto",
            AssetClass::Fund => "fund",
            AssetClass::Eurobond => "eurobond",
            AssetClass::Currency => "currency",
            AssetClass::Commodity => "commodity",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_symbol_is_uppercased() {
        assert_eq!(AssetClass::Stock.index_symbol(), "STOCK_INDEX");
        assert_eq!(AssetClass::Eurobond.index_symbol(), "EUROBOND_INDEX");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&AssetClass::Crypto).unwrap();
        assert_eq!(json, "\"crypto\"");
        let back: AssetClass = serde_json::from_str("\"commodity\"").unwrap();
        assert_eq!(back, AssetClass::Commodity);
    }

    #[test]
    fn default_volatility_table() {
        assert_eq!(AssetClass::Stock.default_volatility(), 20.0);
        assert_eq!(AssetClass::Crypto.default_volatility(), 50.0);
        assert_eq!(AssetClass::Fund.default_volatility(), 10.0);
        assert_eq!(AssetClass::Eurobond.default_volatility(), 5.0);
        assert_eq!(AssetClass::Currency.default_volatility(), 15.0);
        assert_eq!(AssetClass::Commodity.default_volatility(), 25.0);
    }
}
