//! Technical indicator library.
//!
//! Stateless transforms over an ordered price series (oldest to newest).
//! Sequence indicators return a `Vec<f64>` aligned 1:1 with the input,
//! using `f64::NAN` as the "not available" marker for warm-up positions
//! where the window has insufficient history. Callers must treat NaN as
//! undefined, not zero. Scalar indicators (volatility, Sharpe, drawdown)
//! return documented neutral values on degenerate input instead.
//!
//! All standard deviations are population (divide by N, not N-1), and all
//! percentage outputs are plain numbers (12.5 means 12.5%).

pub mod bollinger;
pub mod drawdown;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sharpe;
pub mod sma;
pub mod volatility;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use drawdown::max_drawdown;
pub use ema::ema;
pub use macd::{macd, Macd};
pub use rsi::rsi;
pub use sharpe::sharpe_ratio;
pub use sma::sma;
pub use volatility::realized_volatility;

use thiserror::Error;

/// Trading periods per year assumed when annualizing.
pub const PERIODS_PER_YEAR: f64 = 252.0;

/// Default RSI period.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Default annual risk-free rate (fraction) for Sharpe ratios.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("indicator period must be at least 1, got {period}")]
    InvalidPeriod { period: usize },
}

/// Mean of a slice; 0 when empty.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N); 0 when empty.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Simple returns r[i] = (p[i] - p[i-1]) / p[i-1].
///
/// A zero previous price yields a 0 return rather than a division by zero.
pub(crate) fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|pair| {
            if pair[0] == 0.0 {
                0.0
            } else {
                (pair[1] - pair[0]) / pair[0]
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
