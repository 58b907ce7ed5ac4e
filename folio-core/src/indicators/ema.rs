//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = EMA[t-1] + (price[t] - EMA[t-1]) * alpha,
//! alpha = 2 / (period + 1). Seeded at price[0], so every index is
//! defined — early values are statistically unreliable, which callers
//! accept in exchange for a series with no warm-up gap. Do not change
//! the seed to an SMA: downstream MACD values are calibrated against
//! this form.

use super::IndicatorError;

/// EMA over `prices`. Defined for every index (seed = `prices[0]`).
pub fn ema(prices: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }

    let n = prices.len();
    let mut result = Vec::with_capacity(n);
    if n == 0 {
        return Ok(result);
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = prices[0];
    result.push(prev);
    for &price in &prices[1..] {
        prev += (price - prev) * alpha;
        result.push(prev);
    }

    Ok(result)
}
