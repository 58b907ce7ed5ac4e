//! Rebalancing advice — deviation-driven recommendation over the
//! analyzed allocations.

use crate::analytics::deviation::{total_deviation, REBALANCE_WARN_THRESHOLD};
use crate::domain::{Allocation, AssetClass};
use serde::{Deserialize, Serialize};

/// Per-class deviations below this magnitude (percentage points) are not
/// surfaced as breaches.
const BREACH_THRESHOLD: f64 = 1.0;

/// Portfolio-level advice derived from the analyzed allocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileAdvice {
    pub total_deviation: f64,
    /// True when total deviation exceeds the warn threshold.
    pub rebalance_advised: bool,
    /// Classes whose deviation is worth acting on, worst first.
    pub breaches: Vec<Breach>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Breach {
    pub asset_class: AssetClass,
    /// Signed deviation: positive means overweight.
    pub deviation: f64,
}

/// Summarize how far the portfolio has drifted from its targets.
///
/// Expects allocations that have been through the deviation analyzer
/// (`apply_targets`); unanalyzed allocations carry zero deviations and
/// yield a no-op advice.
pub fn recommend_profile(allocations: &[Allocation]) -> ProfileAdvice {
    let total = total_deviation(allocations);

    let mut breaches: Vec<Breach> = allocations
        .iter()
        .filter(|a| a.deviation.abs() >= BREACH_THRESHOLD)
        .map(|a| Breach {
            asset_class: a.asset_class,
            deviation: a.deviation,
        })
        .collect();
    breaches.sort_by(|a, b| b.deviation.abs().total_cmp(&a.deviation.abs()));

    ProfileAdvice {
        total_deviation: total,
        rebalance_advised: total > REBALANCE_WARN_THRESHOLD,
        breaches,
    }
}
