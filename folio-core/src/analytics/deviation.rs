//! Deviation analyzer — attaches target percentages and measures the gap.

use crate::domain::{Allocation, TargetAllocation};

/// Threshold above which the portfolio is considered in need of
/// rebalancing, in percentage points of total deviation.
pub const REBALANCE_WARN_THRESHOLD: f64 = 10.0;

/// Populate `target_percent` and `deviation` on each allocation from
/// the target map. Classes absent from the map get a 0 target.
pub fn apply_targets(allocations: &mut [Allocation], targets: &TargetAllocation) {
    for allocation in allocations {
        allocation.target_percent = targets.percent_for(allocation.asset_class);
        allocation.deviation = allocation.current_percent - allocation.target_percent;
    }
}

/// Total deviation: half the sum of absolute per-class deviations.
///
/// Deviations are signed and net to zero across classes, so summing
/// absolute values counts every misallocated percentage point twice
/// (once on the overweight side, once on the underweight side). The
/// halving is what the warn threshold is calibrated against; do not
/// remove it.
pub fn total_deviation(allocations: &[Allocation]) -> f64 {
    allocations.iter().map(|a| a.deviation.abs()).sum::<f64>() / 2.0
}
