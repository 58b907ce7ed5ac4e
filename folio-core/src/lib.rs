//! Folio Core — portfolio analytics and rebalancing engine.
//!
//! A pure function library over an in-memory holdings snapshot:
//! - Allocation calculator: per-asset-class value and percentage
//! - Deviation analyzer: actual vs target allocation gaps
//! - Trade generator: fee-adjusted buy/sell trades that close the gaps
//! - Scenario evaluator: what-if per-class price shocks
//! - Monte Carlo simulator: seeded random-shock return distributions
//! - Technical indicators: SMA, EMA, RSI, MACD, Bollinger bands,
//!   realized volatility, Sharpe ratio, max drawdown
//! - Signal heuristics: indicator-based asset scores and rebalance advice
//!
//! The engine performs no I/O: holdings come from the caller, results go
//! back to the caller as plain serializable values. All operations are
//! synchronous and stateless; the Monte Carlo simulator is deterministic
//! given its seed.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod indicators;
pub mod rng;
pub mod signals;
