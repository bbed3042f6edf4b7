use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::analytics::rounding::{percent, round2};
use crate::models::TradeEntry;

pub const CONFLUENCE_HIGH: &str = "Alta (>70%)";
pub const CONFLUENCE_MEDIUM: &str = "Media (55-70%)";
pub const CONFLUENCE_LOW: &str = "Baja (<55%)";

const CONFLUENCE_ORDER: &[&str] = &[CONFLUENCE_HIGH, CONFLUENCE_MEDIUM, CONFLUENCE_LOW];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub key: String,
    pub total_trades: usize,
    pub wins: usize,
    pub win_rate_percent: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
}

impl CategoryStat {
    fn from_trades(key: &str, trades: &[&TradeEntry]) -> Self {
        let total = trades.len();
        let wins = trades.iter().filter(|t| t.is_win()).count();
        let total_pnl: f64 = trades.iter().map(|t| t.realized_pnl).sum();
        let avg_pnl = if total > 0 {
            total_pnl / total as f64
        } else {
            0.0
        };

        CategoryStat {
            key: key.to_string(),
            total_trades: total,
            wins,
            win_rate_percent: percent(wins, total),
            total_pnl: round2(total_pnl),
            avg_pnl: round2(avg_pnl),
        }
    }
}

/// How a dimension's categories are ordered once computed. Sorting is stable,
/// so ties keep first-appearance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    TotalPnlDesc,
    WinRateDesc,
    WinsDesc,
    /// Exactly these keys in this order, always present even when empty.
    Fixed(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Asset,
    Session,
    EmotionalState,
    ConfluenceBucket,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Asset,
        Dimension::Session,
        Dimension::EmotionalState,
        Dimension::ConfluenceBucket,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Asset => "asset",
            Dimension::Session => "session",
            Dimension::EmotionalState => "emotionalState",
            Dimension::ConfluenceBucket => "confluenceBucket",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Asset => "ASSET",
            Dimension::Session => "SESSION",
            Dimension::EmotionalState => "EMOTIONAL STATE",
            Dimension::ConfluenceBucket => "CONFLUENCE",
        }
    }

    pub fn extract_key(&self, trade: &TradeEntry) -> String {
        match self {
            Dimension::Asset => trade.asset_key(),
            Dimension::Session => trade.session_key(),
            Dimension::EmotionalState => trade.emotional_state_key(),
            Dimension::ConfluenceBucket => confluence_bucket(trade.confluence_percentage).to_string(),
        }
    }

    /// Assets rank by profit, sessions by consistency, emotional states by raw
    /// win count, and confluence buckets stay in band order. Because the bands
    /// never move, the confluence `best` is always the Alta band, even when no
    /// trade landed in it.
    pub fn sort_policy(&self) -> SortPolicy {
        match self {
            Dimension::Asset => SortPolicy::TotalPnlDesc,
            Dimension::Session => SortPolicy::WinRateDesc,
            Dimension::EmotionalState => SortPolicy::WinsDesc,
            Dimension::ConfluenceBucket => SortPolicy::Fixed(CONFLUENCE_ORDER),
        }
    }

    /// Emotional states only look at winning trades; every other dimension
    /// covers all closed trades.
    pub fn includes(&self, trade: &TradeEntry) -> bool {
        match self {
            Dimension::EmotionalState => trade.is_win(),
            _ => true,
        }
    }

    pub fn breakdown(&self, closed: &[&TradeEntry]) -> Vec<CategoryStat> {
        let population: Vec<&TradeEntry> = closed.iter().copied().filter(|t| self.includes(t)).collect();
        breakdown(&population, |t| self.extract_key(t), self.sort_policy())
    }
}

/// `> 70` is high, `55..=70` medium, everything below 55 low.
pub fn confluence_bucket(pct: f64) -> &'static str {
    if pct > 70.0 {
        CONFLUENCE_HIGH
    } else if pct >= 55.0 {
        CONFLUENCE_MEDIUM
    } else {
        CONFLUENCE_LOW
    }
}

/// Groups `closed` by `key_of` and orders the per-category stats by `policy`.
pub fn breakdown<F>(closed: &[&TradeEntry], key_of: F, policy: SortPolicy) -> Vec<CategoryStat>
where
    F: Fn(&TradeEntry) -> String,
{
    if closed.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&TradeEntry>> = HashMap::new();
    for &trade in closed {
        let key = key_of(trade);
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        buckets.entry(key).or_default().push(trade);
    }

    let stats_for = |key: &str| {
        let trades = buckets.get(key).map(Vec::as_slice).unwrap_or(&[]);
        CategoryStat::from_trades(key, trades)
    };

    match policy {
        SortPolicy::Fixed(fixed) => fixed.iter().map(|k| stats_for(*k)).collect(),
        SortPolicy::TotalPnlDesc => {
            let mut out: Vec<CategoryStat> = order.iter().map(|k| stats_for(k.as_str())).collect();
            out.sort_by(|a, b| b.total_pnl.total_cmp(&a.total_pnl));
            out
        }
        SortPolicy::WinRateDesc => {
            let mut out: Vec<CategoryStat> = order.iter().map(|k| stats_for(k.as_str())).collect();
            out.sort_by(|a, b| b.win_rate_percent.total_cmp(&a.win_rate_percent));
            out
        }
        SortPolicy::WinsDesc => {
            let mut out: Vec<CategoryStat> = order.iter().map(|k| stats_for(k.as_str())).collect();
            out.sort_by(|a, b| b.wins.cmp(&a.wins));
            out
        }
    }
}
