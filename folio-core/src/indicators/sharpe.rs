//! Sharpe ratio — annualized excess return per unit of annualized risk.
//!
//! annualized_return = mean(simple returns) * 252
//! annualized_stddev = population_stddev(simple returns) * sqrt(252)
//! ratio = (annualized_return - risk_free_rate) / annualized_stddev

use super::{mean, population_std_dev, simple_returns, PERIODS_PER_YEAR};

/// Sharpe ratio over the whole price series. `risk_free_rate` is an
/// annual fraction (0.05 = 5%). 0 when fewer than two prices are
/// available or when the return stddev is 0.
pub fn sharpe_ratio(prices: &[f64], risk_free_rate: f64) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let returns = simple_returns(prices);
    let annualized_return = mean(&returns) * PERIODS_PER_YEAR;
    let annualized_std_dev = population_std_dev(&returns) * PERIODS_PER_YEAR.sqrt();

    if annualized_std_dev == 0.0 {
        0.0
    } else {
        (annualized_return - risk_free_rate) / annualized_std_dev
    }
}
