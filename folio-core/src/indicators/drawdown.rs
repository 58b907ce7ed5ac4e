//! Maximum drawdown — deepest peak-to-trough decline, in percent.

/// Largest drawdown over the series: max over t of
/// (running_peak - price[t]) / running_peak, as a percentage.
/// 0 for empty or monotonically non-decreasing input.
pub fn max_drawdown(prices: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;

    for &price in prices {
        if price > peak {
            peak = price;
        }
        if peak > 0.0 {
            let drawdown = (peak - price) / peak;
            if drawdown > worst {
                worst = drawdown;
            }
        }
    }

    worst * 100.0
}
