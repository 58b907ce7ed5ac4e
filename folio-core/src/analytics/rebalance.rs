//! Trade generator — turns allocation gaps into concrete buy/sell trades.

use crate::config::ConfigError;
use crate::domain::{AssetClass, Holding, TargetAllocation, Trade, TradeAction};
use std::collections::BTreeSet;

/// Minimum per-class gap worth trading, as a percent of total portfolio
/// value. Gaps below this are noise and generate no trades.
pub const DEAD_BAND_PERCENT: f64 = 1.0;

/// Default transaction fee, in percent.
pub const DEFAULT_FEE_PERCENT: f64 = 0.1;

/// Reference price used when buying into a class the portfolio holds
/// nothing in yet.
const PLACEHOLDER_PRICE: f64 = 100.0;

/// Generate the trades that move `holdings` toward `targets`.
///
/// Per asset class present in either the holdings or the target map, the
/// gap between target value and current value is computed; gaps inside
/// the dead-band are skipped. A positive gap produces one buy trade
/// against the class's first holding (or a `<CLASS>_INDEX` placeholder at
/// price 100 when the class is empty — a deliberate "buy more of the
/// class" simplification). A negative gap sells holdings in ascending
/// unrealized-profit order (losers first), never more than a holding's
/// current value, one trade per holding touched.
///
/// Every trade's amount is then inflated by `(1 + fee_percent / 100)`;
/// the fee is not reported separately.
pub fn generate_trades(
    holdings: &[Holding],
    targets: &TargetAllocation,
    fee_percent: f64,
) -> Result<Vec<Trade>, ConfigError> {
    if fee_percent < 0.0 || fee_percent.is_nan() {
        return Err(ConfigError::InvalidFeePercent { fee_percent });
    }

    let total_value: f64 = holdings.iter().map(Holding::market_value).sum();
    if total_value == 0.0 {
        return Ok(Vec::new());
    }

    let classes: BTreeSet<AssetClass> = holdings
        .iter()
        .map(|h| h.asset_class)
        .chain(targets.classes())
        .collect();

    let dead_band = total_value * DEAD_BAND_PERCENT / 100.0;
    let mut trades = Vec::new();

    for class in classes {
        let class_holdings: Vec<&Holding> = holdings
            .iter()
            .filter(|h| h.asset_class == class)
            .collect();

        let current_value: f64 = class_holdings.iter().map(|h| h.market_value()).sum();
        let current_percent = current_value / total_value * 100.0;
        let target_percent = targets.percent_for(class);
        let target_value = total_value * target_percent / 100.0;
        let difference = target_value - current_value;

        if difference.abs() < dead_band {
            continue;
        }

        let rationale = format!(
            "rebalance {class}: current {current_percent:.1}% vs target {target_percent:.1}%"
        );

        if difference > 0.0 {
            // One buy per underweight class. Reference the first existing
            // holding when there is one; otherwise buy "the class" via a
            // placeholder index symbol.
            let (symbol, reference_price) = match class_holdings.first() {
                Some(h) => (h.symbol.clone(), h.current_price),
                None => (class.index_symbol(), PLACEHOLDER_PRICE),
            };
            trades.push(Trade {
                symbol,
                asset_class: class,
                action: TradeAction::Buy,
                amount: difference,
                quantity: 0.0,
                reference_price,
                rationale,
            });
        } else {
            // Sell losers before winners until the excess is covered.
            let mut sellable = class_holdings;
            sellable.sort_by(|a, b| {
                a.unrealized_pnl_percent()
                    .total_cmp(&b.unrealized_pnl_percent())
            });

            let mut remaining = -difference;
            for holding in sellable {
                if remaining <= 0.0 {
                    break;
                }
                let value = holding.market_value();
                if value <= 0.0 {
                    continue;
                }
                let sell_amount = remaining.min(value);
                trades.push(Trade {
                    symbol: holding.symbol.clone(),
                    asset_class: class,
                    action: TradeAction::Sell,
                    amount: sell_amount,
                    quantity: 0.0,
                    reference_price: holding.current_price,
                    rationale: rationale.clone(),
                });
                remaining -= sell_amount;
            }
        }
    }

    // Fee pass: inflate amounts, then derive quantities from the post-fee
    // amount (a Trade's quantity is defined as amount / reference price).
    let fee_factor = 1.0 + fee_percent / 100.0;
    for trade in &mut trades {
        trade.amount *= fee_factor;
        trade.quantity = if trade.reference_price > 0.0 {
            trade.amount / trade.reference_price
        } else {
            0.0
        };
    }

    Ok(trades)
}
