//! Monte Carlo simulator — random price-shock trials over the portfolio.
//!
//! Each trial draws an independent uniform price change on
//! [-volatility, +volatility] percent for every holding (keyed by asset
//! class), reprices the portfolio, and records the simulated terminal
//! value. The uniform (not normal/log-normal) shape is a deliberate
//! modeling choice; changing it to a Gaussian changes every downstream
//! risk number and needs product sign-off first.
//!
//! Trials are parallelized with rayon. Each trial derives its own RNG
//! from a BLAKE3 sub-seed, so results are identical regardless of
//! thread count or scheduling order.

use crate::config::ConfigError;
use crate::domain::{AssetClass, Holding};
use crate::rng::SeedDomain;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of trials.
pub const DEFAULT_ITERATIONS: usize = 1000;

const SEED_LABEL: &str = "monte_carlo";

/// Simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of trials. Must be at least 1.
    pub iterations: usize,
    /// Per-class annualized volatility in percent; classes not listed
    /// fall back to [`AssetClass::default_volatility`].
    pub volatility: BTreeMap<AssetClass, f64>,
    /// Master seed. Trials derive sub-seeds from it, so two runs with
    /// the same seed and holdings produce identical results.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            volatility: BTreeMap::new(),
            seed: 42,
        }
    }
}

impl MonteCarloConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        for (&class, &volatility) in &self.volatility {
            if volatility < 0.0 || volatility.is_nan() {
                return Err(ConfigError::InvalidVolatility { class, volatility });
            }
        }
        Ok(())
    }

    fn volatility_for(&self, class: AssetClass) -> f64 {
        self.volatility
            .get(&class)
            .copied()
            .unwrap_or_else(|| class.default_volatility())
    }
}

/// Distribution summary over the sorted sample of simulated terminal
/// portfolio values. All probabilities are percentages (0-100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonteCarloResult {
    pub iterations: usize,
    pub current_value: f64,
    pub mean: f64,
    /// Middle element of the sorted sample.
    pub median: f64,
    pub worst_case: f64,
    pub best_case: f64,
    /// 2.5th and 97.5th percentile bounds.
    pub ci95: ConfidenceInterval,
    /// 0.5th and 99.5th percentile bounds.
    pub ci99: ConfidenceInterval,
    /// Probability of ending below the current value.
    pub probability_loss: f64,
    /// Probability of gaining at least 10%.
    pub probability_gain_10: f64,
    /// Probability of gaining at least 20%.
    pub probability_gain_20: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

/// Run the simulation and summarize the resulting distribution.
pub fn simulate(
    holdings: &[Holding],
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult, ConfigError> {
    config.validate()?;

    let current_value: f64 = holdings.iter().map(Holding::market_value).sum();
    let seeds = SeedDomain::new(config.seed);

    let mut values: Vec<f64> = (0..config.iterations)
        .into_par_iter()
        .map(|iteration| {
            let mut rng = seeds.rng_for(SEED_LABEL, iteration as u64);
            holdings
                .iter()
                .map(|holding| {
                    let volatility = config.volatility_for(holding.asset_class);
                    let draw: f64 = rng.gen();
                    // Uniform on [-volatility, +volatility] percent.
                    let change = (draw - 0.5) * 2.0 * volatility;
                    holding.quantity * holding.current_price * (1.0 + change / 100.0)
                })
                .sum()
        })
        .collect();

    values.sort_by(f64::total_cmp);

    let n = values.len();
    let count = |predicate: &dyn Fn(f64) -> bool| {
        values.iter().filter(|&&v| predicate(v)).count() as f64 / n as f64 * 100.0
    };

    Ok(MonteCarloResult {
        iterations: n,
        current_value,
        mean: values.iter().sum::<f64>() / n as f64,
        median: values[n / 2],
        worst_case: values[0],
        best_case: values[n - 1],
        ci95: ConfidenceInterval {
            low: values[percentile_index(n, 2.5)],
            high: values[percentile_index(n, 97.5)],
        },
        ci99: ConfidenceInterval {
            low: values[percentile_index(n, 0.5)],
            high: values[percentile_index(n, 99.5)],
        },
        probability_loss: count(&|v| v < current_value),
        probability_gain_10: count(&|v| v >= current_value * 1.10),
        probability_gain_20: count(&|v| v >= current_value * 1.20),
    })
}

/// Index of the q-th percentile in a sorted sample of n values.
fn percentile_index(n: usize, q: f64) -> usize {
    ((n as f64 * q / 100.0) as usize).min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding::new(1, "AAPL", AssetClass::Stock, 10.0, 100.0, 90.0),
            Holding::new(2, "BTC", AssetClass::Crypto, 0.5, 2000.0, 1500.0),
        ]
    }

    fn zero_volatility() -> BTreeMap<AssetClass, f64> {
        AssetClass::ALL.iter().map(|&c| (c, 0.0)).collect()
    }

    #[test]
    fn zero_volatility_collapses_distribution() {
        let config = MonteCarloConfig {
            iterations: 200,
            volatility: zero_volatility(),
            seed: 7,
        };
        let result = simulate(&sample_holdings(), &config).unwrap();

        assert_eq!(result.current_value, 2000.0);
        assert_eq!(result.mean, 2000.0);
        assert_eq!(result.median, 2000.0);
        assert_eq!(result.worst_case, 2000.0);
        assert_eq!(result.best_case, 2000.0);
        assert_eq!(result.probability_loss, 0.0);
        assert_eq!(result.probability_gain_10, 0.0);
        assert_eq!(result.probability_gain_20, 0.0);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let config = MonteCarloConfig::default();
        let a = simulate(&sample_holdings(), &config).unwrap();
        let b = simulate(&sample_holdings(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let holdings = sample_holdings();
        let a = simulate(&holdings, &MonteCarloConfig { seed: 1, ..Default::default() }).unwrap();
        let b = simulate(&holdings, &MonteCarloConfig { seed: 2, ..Default::default() }).unwrap();
        assert_ne!(a.mean, b.mean);
    }

    #[test]
    fn values_bounded_by_volatility() {
        // With 20% volatility on everything, no trial can move the
        // portfolio by more than 20%.
        let volatility: BTreeMap<AssetClass, f64> =
            AssetClass::ALL.iter().map(|&c| (c, 20.0)).collect();
        let config = MonteCarloConfig {
            iterations: 500,
            volatility,
            seed: 3,
        };
        let result = simulate(&sample_holdings(), &config).unwrap();
        assert!(result.worst_case >= 2000.0 * 0.8 - 1e-6);
        assert!(result.best_case <= 2000.0 * 1.2 + 1e-6);
    }

    #[test]
    fn distribution_summary_is_ordered() {
        let config = MonteCarloConfig {
            iterations: 1000,
            seed: 11,
            ..Default::default()
        };
        let result = simulate(&sample_holdings(), &config).unwrap();
        assert!(result.worst_case <= result.ci99.low);
        assert!(result.ci99.low <= result.ci95.low);
        assert!(result.ci95.low <= result.median);
        assert!(result.median <= result.ci95.high);
        assert!(result.ci95.high <= result.ci99.high);
        assert!(result.ci99.high <= result.best_case);
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = MonteCarloConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&sample_holdings(), &config),
            Err(ConfigError::InvalidIterations)
        ));
    }

    #[test]
    fn negative_volatility_rejected() {
        let mut volatility = BTreeMap::new();
        volatility.insert(AssetClass::Stock, -5.0);
        let config = MonteCarloConfig {
            volatility,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&sample_holdings(), &config),
            Err(ConfigError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn empty_portfolio_simulates_to_zero() {
        let result = simulate(&[], &MonteCarloConfig::default()).unwrap();
        assert_eq!(result.mean, 0.0);
        assert_eq!(result.probability_loss, 0.0);
    }
}
