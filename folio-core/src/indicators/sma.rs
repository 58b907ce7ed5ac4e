//! Simple Moving Average (SMA).
//!
//! Rolling mean of prices over a trailing window.
//! First valid value at index period - 1.

use super::IndicatorError;

/// SMA over `prices` with the given window.
///
/// Indices before `period - 1` are `NAN`.
pub fn sma(prices: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }

    let n = prices.len();
    let mut result = vec![f64::NAN; n];

    if n < period {
        return Ok(result);
    }

    let mut sum: f64 = prices[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    // Roll the window forward
    for i in period..n {
        sum = sum - prices[i - period] + prices[i];
        result[i] = sum / period as f64;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let prices = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = sma(&prices, 5).unwrap();

        assert_eq!(result.len(), 7);
        for i in 0..4 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert_approx(result[4], 12.0, DEFAULT_EPSILON);
        assert_approx(result[5], 13.0, DEFAULT_EPSILON);
        assert_approx(result[6], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_of_constant_series_is_constant() {
        let prices = [42.0; 10];
        let result = sma(&prices, 4).unwrap();
        for &v in &result[3..] {
            assert_approx(v, 42.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn sma_1_is_price() {
        let prices = [100.0, 200.0, 300.0];
        let result = sma(&prices, 1).unwrap();
        assert_eq!(result, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn sma_too_few_prices_all_nan() {
        let result = sma(&[10.0, 11.0], 5).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_zero_period_rejected() {
        assert_eq!(
            sma(&[1.0, 2.0], 0),
            Err(IndicatorError::InvalidPeriod { period: 0 })
        );
    }
}
