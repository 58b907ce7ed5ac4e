//! Per-asset scoring — a weighted rule table over indicator outputs.
//!
//! The score starts neutral at 50 and is nudged by each rule; the
//! resulting 0-100 value maps onto a five-level signal. The rules are
//! heuristics for display and screening, not investment advice.

use crate::indicators::{
    macd, realized_volatility, rsi, sma, DEFAULT_RSI_PERIOD,
};
use crate::indicators::macd::{DEFAULT_FAST, DEFAULT_SIGNAL, DEFAULT_SLOW};
use serde::{Deserialize, Serialize};

/// Minimum history needed to run every rule (slow MACD EMA).
pub const MIN_HISTORY: usize = 26;

/// Trend window for the price-vs-SMA rule.
const TREND_PERIOD: usize = 20;

/// Volatility above this percent costs the score a small penalty.
const HIGH_VOLATILITY: f64 = 40.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// Indicator-derived score for one asset's price history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetScore {
    /// 0-100; 50 is neutral.
    pub score: f64,
    pub signal: SignalKind,
    pub rsi: f64,
    pub macd_histogram: f64,
    /// Whether the last price sits above its 20-period SMA.
    pub above_trend: bool,
    /// Annualized realized volatility over the trend window, in percent.
    pub volatility: f64,
}

/// Score a price series (oldest to newest).
///
/// `None` when there are fewer than [`MIN_HISTORY`] prices — too little
/// history to run the rules honestly.
pub fn score_asset(prices: &[f64]) -> Option<AssetScore> {
    if prices.len() < MIN_HISTORY {
        return None;
    }

    // Periods are in-range constants, so the indicator calls cannot fail.
    let rsi_series = rsi(prices, DEFAULT_RSI_PERIOD).ok()?;
    let macd_series = macd(prices, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL).ok()?;
    let trend = sma(prices, TREND_PERIOD).ok()?;

    let last = prices.len() - 1;
    let last_rsi = rsi_series[last];
    let last_histogram = macd_series.histogram[last];
    let above_trend = prices[last] > trend[last];
    let volatility = realized_volatility(prices, TREND_PERIOD);

    let mut score: f64 = 50.0;

    // Mean reversion: oversold is a buying opportunity, overbought a risk.
    if last_rsi < 30.0 {
        score += 20.0;
    } else if last_rsi > 70.0 {
        score -= 20.0;
    }

    // Momentum: MACD histogram sign.
    if last_histogram > 0.0 {
        score += 15.0;
    } else if last_histogram < 0.0 {
        score -= 15.0;
    }

    // Trend: price above/below its SMA.
    if above_trend {
        score += 10.0;
    } else {
        score -= 10.0;
    }

    // Risk penalty for very choppy series.
    if volatility > HIGH_VOLATILITY {
        score -= 5.0;
    }

    let score = score.clamp(0.0, 100.0);

    Some(AssetScore {
        score,
        signal: signal_for(score),
        rsi: last_rsi,
        macd_histogram: last_histogram,
        above_trend,
        volatility,
    })
}

fn signal_for(score: f64) -> SignalKind {
    if score >= 75.0 {
        SignalKind::StrongBuy
    } else if score >= 60.0 {
        SignalKind::Buy
    } else if score > 40.0 {
        SignalKind::Hold
    } else if score > 25.0 {
        SignalKind::Sell
    } else {
        SignalKind::StrongSell
    }
}
