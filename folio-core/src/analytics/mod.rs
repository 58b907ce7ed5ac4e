//! Analytics operations — the five engine computations over a holdings
//! snapshot.
//!
//! Data flow: [`allocation::compute_allocations`] aggregates holdings per
//! asset class, [`deviation::apply_targets`] attaches the target map,
//! [`rebalance::generate_trades`] turns the gaps into trades, and
//! [`scenario::evaluate`] / [`monte_carlo::simulate`] independently
//! project the same snapshot under deterministic or random shocks.
//!
//! Every operation is pure and synchronous: no I/O, no locks, no state
//! shared between calls. The only randomness is the Monte Carlo
//! simulator's explicitly seeded RNG.

pub mod allocation;
pub mod deviation;
pub mod monte_carlo;
pub mod rebalance;
pub mod scenario;

pub use allocation::compute_allocations;
pub use deviation::{apply_targets, total_deviation, REBALANCE_WARN_THRESHOLD};
pub use monte_carlo::{simulate, ConfidenceInterval, MonteCarloConfig, MonteCarloResult};
pub use rebalance::{generate_trades, DEAD_BAND_PERCENT, DEFAULT_FEE_PERCENT};
pub use scenario::evaluate;
