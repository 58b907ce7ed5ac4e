//! Relative Strength Index (RSI).
//!
//! Plain rolling averages of gains and losses over the trailing `period`
//! price changes (not Wilder smoothing).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss); avg_loss == 0 -> 100.
//! First `period` outputs are NaN.

use super::IndicatorError;

/// RSI over `prices`. Defined from index `period` onward.
pub fn rsi(prices: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }

    let n = prices.len();
    let mut result = vec![f64::NAN; n];
    if n < period + 1 {
        return Ok(result);
    }

    // gains[i] / losses[i] describe the step into price i.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    for i in period..n {
        let window = (i + 1 - period)..=i;
        let avg_gain: f64 = gains[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[window].iter().sum::<f64>() / period as f64;

        result[i] = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn rsi_strictly_increasing_is_100() {
        let prices = [100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        let result = rsi(&prices, 3).unwrap();
        for &v in &result[3..] {
            assert_approx(v, 100.0, 1e-9);
        }
    }

    #[test]
    fn rsi_strictly_decreasing_is_0() {
        let prices = [105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        let result = rsi(&prices, 3).unwrap();
        for &v in &result[3..] {
            assert_approx(v, 0.0, 1e-9);
        }
    }

    #[test]
    fn rsi_first_period_outputs_undefined() {
        let prices = [44.0, 44.34, 44.09, 43.61, 44.33];
        let result = rsi(&prices, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(!result[3].is_nan());
    }

    #[test]
    fn rsi_mixed_window_known_value() {
        // Changes: +0.34, -0.25, -0.48, +0.72
        // Window ending at index 3: gains 0.34, losses 0.73
        // RSI = 100 - 100/(1 + 0.34/0.73) = 31.77...
        let prices = [44.0, 44.34, 44.09, 43.61, 44.33];
        let result = rsi(&prices, 3).unwrap();
        assert_approx(result[3], 100.0 - 100.0 / (1.0 + 0.34 / 0.73), 1e-9);
    }

    #[test]
    fn rsi_bounds() {
        let prices = [100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0];
        let result = rsi(&prices, 3).unwrap();
        for (i, &v) in result.iter().enumerate() {
            if !v.is_nan() {
                assert!(
                    (0.0..=100.0).contains(&v),
                    "RSI out of bounds at index {i}: {v}"
                );
            }
        }
    }

    #[test]
    fn rsi_flat_series_is_100() {
        // No losses at all, so avg_loss == 0 -> 100 by contract.
        let result = rsi(&[50.0; 6], 3).unwrap();
        assert_approx(result[5], 100.0, 1e-9);
    }

    #[test]
    fn rsi_too_few_prices_all_nan() {
        let result = rsi(&[1.0, 2.0, 3.0], 14).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
