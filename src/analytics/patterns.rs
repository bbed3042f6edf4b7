use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analytics::breakdown::{CategoryStat, Dimension};
use crate::analytics::rounding::percent;
use crate::models::TradeEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionReport {
    pub dimension_name: String,
    pub categories: Vec<CategoryStat>,
    pub best: Option<CategoryStat>,
    pub worst: Option<CategoryStat>,
}

impl DimensionReport {
    /// Best is the head of the ranked list, worst the tail. With a single
    /// category both point at it; with none both are absent.
    pub fn rank(dimension_name: &str, categories: Vec<CategoryStat>) -> Self {
        DimensionReport {
            dimension_name: dimension_name.to_string(),
            best: categories.first().cloned(),
            worst: categories.last().cloned(),
            categories,
        }
    }

    pub fn for_dimension(dimension: Dimension, closed: &[&TradeEntry]) -> Self {
        Self::rank(dimension.name(), dimension.breakdown(closed))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Share of all winning trades that came from one emotional state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinShare {
    pub state: String,
    pub wins: usize,
    pub share_percent: f64,
}

/// Which emotional states the wins came from, most wins first. Only WON trades
/// are looked at, so this says nothing about a state's win rate.
pub fn emotional_win_share(closed: &[&TradeEntry]) -> Vec<WinShare> {
    let winners: Vec<&TradeEntry> = closed.iter().copied().filter(|t| t.is_win()).collect();
    let total_wins = winners.len();

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for trade in &winners {
        let state = trade.emotional_state_key();
        if !counts.contains_key(&state) {
            order.push(state.clone());
        }
        *counts.entry(state).or_insert(0) += 1;
    }

    let mut shares: Vec<WinShare> = order
        .into_iter()
        .map(|state| {
            let wins = counts.get(&state).copied().unwrap_or(0);
            WinShare {
                share_percent: percent(wins, total_wins),
                wins,
                state,
            }
        })
        .collect();
    shares.sort_by(|a, b| b.wins.cmp(&a.wins));
    shares
}
