//! Domain types for the analytics engine.

pub mod allocation;
pub mod asset_class;
pub mod holding;
pub mod scenario;
pub mod trade;

pub use allocation::{Allocation, TargetAllocation};
pub use asset_class::AssetClass;
pub use holding::{total_value, Holding};
pub use scenario::{AssetImpact, ScenarioResult, ScenarioShock};
pub use trade::{Trade, TradeAction};
