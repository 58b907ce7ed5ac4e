//! Holding — one position in the caller's portfolio snapshot.
//!
//! The engine only ever reads holdings; it never mutates them. All
//! analytics are computed fresh from a slice of holdings on each call.

use super::asset_class::AssetClass;
use serde::{Deserialize, Serialize};

/// A single position: what is held, how much, and at what prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub id: u64,
    pub symbol: String,
    pub asset_class: AssetClass,
    /// Units held. Non-negative.
    pub quantity: f64,
    /// Latest known price per unit. Non-negative.
    pub current_price: f64,
    /// Average acquisition price per unit. Non-negative.
    pub purchase_price: f64,
}

impl Holding {
    pub fn new(
        id: u64,
        symbol: impl Into<String>,
        asset_class: AssetClass,
        quantity: f64,
        current_price: f64,
        purchase_price: f64,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            asset_class,
            quantity,
            current_price,
            purchase_price,
        }
    }

    /// Current market value: quantity x current price.
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// Invested amount: quantity x purchase price.
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.purchase_price
    }

    /// Unrealized profit or loss in money terms.
    pub fn unrealized_pnl(&self) -> f64 {
        self.market_value() - self.cost_basis()
    }

    /// Unrealized profit or loss as a percentage of cost basis.
    ///
    /// 0 when the cost basis is 0 (e.g. airdropped or zero-quantity
    /// positions) rather than a division by zero.
    pub fn unrealized_pnl_percent(&self) -> f64 {
        let basis = self.cost_basis();
        if basis == 0.0 {
            0.0
        } else {
            self.unrealized_pnl() / basis * 100.0
        }
    }
}

/// Total market value of a holdings snapshot.
pub fn total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::market_value).sum()
}
