//! Allocation calculator — per-asset-class value and percentage.

use crate::domain::{Allocation, AssetClass, Holding};
use std::collections::BTreeMap;

/// Aggregate holdings into one [`Allocation`] per asset class present.
///
/// Results come back in canonical class order with `target_percent` and
/// `deviation` zeroed; the deviation analyzer fills those in. When the
/// total portfolio value is 0 (empty or all-worthless holdings) the
/// result is empty — there is no percentage to assign.
pub fn compute_allocations(holdings: &[Holding]) -> Vec<Allocation> {
    let total_value: f64 = holdings.iter().map(Holding::market_value).sum();
    if total_value == 0.0 {
        return Vec::new();
    }

    let mut by_class: BTreeMap<AssetClass, f64> = BTreeMap::new();
    for holding in holdings {
        *by_class.entry(holding.asset_class).or_insert(0.0) += holding.market_value();
    }

    by_class
        .into_iter()
        .map(|(asset_class, current_value)| Allocation {
            asset_class,
            current_value,
            current_percent: current_value / total_value * 100.0,
            target_percent: 0.0,
            deviation: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding::new(1, "AAPL", AssetClass::Stock, 10.0, 100.0, 80.0),
            Holding::new(2, "MSFT", AssetClass::Stock, 5.0, 200.0, 150.0),
            Holding::new(3, "BTC", AssetClass::Crypto, 0.1, 10_000.0, 8_000.0),
        ]
    }

    #[test]
    fn groups_by_class_and_sums_values() {
        let allocations = compute_allocations(&sample_holdings());
        assert_eq!(allocations.len(), 2);

        let stock = allocations
            .iter()
            .find(|a| a.asset_class == AssetClass::Stock)
            .unwrap();
        assert_eq!(stock.current_value, 2000.0);

        let crypto = allocations
            .iter()
            .find(|a| a.asset_class == AssetClass::Crypto)
            .unwrap();
        assert_eq!(crypto.current_value, 1000.0);
    }

    #[test]
    fn percentages_sum_to_100() {
        let allocations = compute_allocations(&sample_holdings());
        let total: f64 = allocations.iter().map(|a| a.current_percent).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn empty_holdings_give_empty_allocations() {
        assert!(compute_allocations(&[]).is_empty());
    }

    #[test]
    fn zero_total_value_gives_empty_allocations() {
        let holdings = vec![Holding::new(1, "DUST", AssetClass::Crypto, 100.0, 0.0, 1.0)];
        assert!(compute_allocations(&holdings).is_empty());
    }
}
