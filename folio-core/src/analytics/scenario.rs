//! Scenario evaluator — what-if price shocks applied per asset class.

use crate::domain::{AssetImpact, Holding, ScenarioResult, ScenarioShock};

/// Apply `shock` to every holding and project the portfolio.
///
/// Each holding is repriced at `current_price * (1 + change / 100)` where
/// `change` is the shock for its asset class (0 when the class is absent
/// from the map). Impacts are reported per holding, in input order.
pub fn evaluate(holdings: &[Holding], name: impl Into<String>, shock: &ScenarioShock) -> ScenarioResult {
    let mut current_total = 0.0;
    let mut projected_total = 0.0;
    let mut impacts = Vec::with_capacity(holdings.len());

    for holding in holdings {
        let change_percent = shock.change_for(holding.asset_class);
        let new_price = holding.current_price * (1.0 + change_percent / 100.0);

        let current_value = holding.market_value();
        let projected_value = holding.quantity * new_price;
        let change = projected_value - current_value;

        current_total += current_value;
        projected_total += projected_value;

        impacts.push(AssetImpact {
            symbol: holding.symbol.clone(),
            asset_class: holding.asset_class,
            current_value,
            projected_value,
            change,
            change_percent: percent_change(change, current_value),
        });
    }

    let change = projected_total - current_total;
    ScenarioResult {
        name: name.into(),
        current_value: current_total,
        projected_value: projected_total,
        change,
        change_percent: percent_change(change, current_total),
        impacts,
    }
}

/// Change as a percent of the base; 0 when the base is 0.
fn percent_change(change: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        change / base * 100.0
    }
}
