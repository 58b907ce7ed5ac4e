//! Realized volatility — annualized stddev of trailing simple returns.
//!
//! volatility = population_stddev(returns) * sqrt(252) * 100, i.e. an
//! annualized percentage assuming ~252 trading periods per year.

use super::{population_std_dev, simple_returns, PERIODS_PER_YEAR};

/// Annualized realized volatility over the trailing `period` returns,
/// in percent. 0 when there is not enough history (`period` returns
/// need `period + 1` prices) or when `period` is 0.
pub fn realized_volatility(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 0.0;
    }

    let returns = simple_returns(&prices[prices.len() - (period + 1)..]);
    population_std_dev(&returns) * PERIODS_PER_YEAR.sqrt() * 100.0
}
