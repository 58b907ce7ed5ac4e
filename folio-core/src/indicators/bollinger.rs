//! Bollinger Bands — SMA middle band +/- a standard deviation multiple.
//!
//! Uses population stddev (divide by N). Undefined before period - 1.

use super::sma::sma;
use super::{population_std_dev, IndicatorError};
use serde::{Deserialize, Serialize};

/// Default window.
pub const DEFAULT_PERIOD: usize = 20;
/// Default band width multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Upper, middle, and lower bands, aligned 1:1 with the input prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger bands over `prices` with the given window and multiplier.
pub fn bollinger_bands(
    prices: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerBands, IndicatorError> {
    let middle = sma(prices, period)?;

    let n = prices.len();
    let mut upper = vec![f64::NAN; n];
    let mut lower = vec![f64::NAN; n];

    if n >= period {
        for i in (period - 1)..n {
            let window = &prices[(i + 1 - period)..=i];
            let half_width = multiplier * population_std_dev(window);
            upper[i] = middle[i] + half_width;
            lower[i] = middle[i] - half_width;
        }
    }

    Ok(BollingerBands {
        upper,
        middle,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn middle_band_is_sma() {
        let prices = [10.0, 11.0, 12.0, 13.0, 14.0];
        let bands = bollinger_bands(&prices, 3, 2.0).unwrap();
        assert!(bands.middle[1].is_nan());
        assert_approx(bands.middle[2], 11.0, DEFAULT_EPSILON);
        assert_approx(bands.middle[3], 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bands_are_symmetric_around_middle() {
        let prices = [10.0, 11.0, 12.0, 13.0, 14.0];
        let bands = bollinger_bands(&prices, 3, 2.0).unwrap();
        for i in 2..5 {
            let up = bands.upper[i] - bands.middle[i];
            let down = bands.middle[i] - bands.lower[i];
            assert_approx(up, down, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn constant_prices_collapse_bands() {
        let prices = [100.0; 5];
        let bands = bollinger_bands(&prices, 3, 2.0).unwrap();
        assert_approx(bands.upper[4], 100.0, DEFAULT_EPSILON);
        assert_approx(bands.lower[4], 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn known_half_width() {
        // Window [10, 11, 12]: mean 11, population variance 2/3.
        let prices = [10.0, 11.0, 12.0];
        let bands = bollinger_bands(&prices, 3, 2.0).unwrap();
        let expected_half = 2.0 * (2.0_f64 / 3.0).sqrt();
        assert_approx(bands.upper[2], 11.0 + expected_half, DEFAULT_EPSILON);
        assert_approx(bands.lower[2], 11.0 - expected_half, DEFAULT_EPSILON);
    }

    #[test]
    fn too_few_prices_all_nan() {
        let bands = bollinger_bands(&[1.0, 2.0], 20, 2.0).unwrap();
        assert!(bands.upper.iter().all(|v| v.is_nan()));
        assert!(bands.lower.iter().all(|v| v.is_nan()));
    }
}
