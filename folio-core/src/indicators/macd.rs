//! Moving Average Convergence Divergence (MACD).
//!
//! MACD line = EMA(fast) - EMA(slow); signal = EMA(MACD line, signal
//! period); histogram = MACD line - signal. Because the EMAs seed at
//! the first price, all three series are defined from index 0.

use super::ema::ema;
use super::IndicatorError;
use serde::{Deserialize, Serialize};

/// Default fast EMA period.
pub const DEFAULT_FAST: usize = 12;
/// Default slow EMA period.
pub const DEFAULT_SLOW: usize = 26;
/// Default signal EMA period.
pub const DEFAULT_SIGNAL: usize = 9;

/// The three MACD series, aligned 1:1 with the input prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Macd {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// MACD over `prices` with the given fast/slow/signal periods.
pub fn macd(
    prices: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<Macd, IndicatorError> {
    let fast_ema = ema(prices, fast)?;
    let slow_ema = ema(prices, slow)?;

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema(&macd_line, signal_period)?;
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(&signal)
        .map(|(m, s)| m - s)
        .collect();

    Ok(Macd {
        macd: macd_line,
        signal,
        histogram,
    })
}
