//! Signal heuristics — asset scoring and rebalancing advice built on the
//! indicator and allocation primitives.

pub mod advice;
pub mod score;

pub use advice::{recommend_profile, Breach, ProfileAdvice};
pub use score::{score_asset, AssetScore, SignalKind, MIN_HISTORY};
