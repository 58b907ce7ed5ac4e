//! Trade — one buy or sell proposed by the rebalancer.
//!
//! Trades are transient outputs: the engine proposes them, the caller
//! decides whether to record or execute them.

use super::asset_class::AssetClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// A proposed rebalancing trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub action: TradeAction,
    /// Money to move, fee-inflated. Non-negative.
    pub amount: f64,
    /// Units implied by amount / reference_price.
    pub quantity: f64,
    /// Price the quantity was derived from.
    pub reference_price: f64,
    /// Human-readable audit string: target vs current percent at
    /// generation time.
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_serializes_with_lowercase_action() {
        let trade = Trade {
            symbol: "BTC".into(),
            asset_class: AssetClass::Crypto,
            action: TradeAction::Sell,
            amount: 500.0,
            quantity: 0.005,
            reference_price: 100_000.0,
            rationale: "test".into(),
        };
        let json = serde_json::to_string(&trade).unwrap();
        assert!(json.contains("\"action\":\"sell\""));
        assert!(json.contains("\"asset_class\":\"crypto\""));
    }
}
