use serde::{Deserialize, Serialize};

use crate::analytics::rounding::percent;
use crate::models::{Outcome, TradeEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub category: Outcome,
    pub value: usize,
    pub percent: f64,
}

/// Outcome counts in WON, LOST, BREAKEVEN order. Empty outcomes are left out so
/// a pie chart never gets a zero-width segment; the values still sum to the
/// number of closed trades.
pub fn outcome_distribution(closed: &[&TradeEntry]) -> Vec<DistributionSlice> {
    let total = closed.len();
    if total == 0 {
        return Vec::new();
    }

    Outcome::ALL
        .iter()
        .filter_map(|&outcome| {
            let value = closed
                .iter()
                .filter(|t| t.outcome == Some(outcome))
                .count();
            (value > 0).then(|| DistributionSlice {
                category: outcome,
                value,
                percent: percent(value, total),
            })
        })
        .collect()
}
