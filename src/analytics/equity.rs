use serde::{Deserialize, Serialize};

use crate::analytics::rounding::round2;
use crate::models::TradeEntry;

pub const START_LABEL: &str = "Inicio";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub index: usize,
    pub cumulative_pnl: f64,
    pub label: String,
}

/// Running realized P&L over `closed`, which must already be in canonical order.
///
/// A non-empty curve starts with a synthetic `Inicio` point at zero. The total is
/// carried unrounded so the last point equals the rounded sum of all P&L.
pub fn equity_curve(closed: &[&TradeEntry]) -> Vec<EquityPoint> {
    if closed.is_empty() {
        return Vec::new();
    }

    let mut curve = Vec::with_capacity(closed.len() + 1);
    curve.push(EquityPoint {
        index: 0,
        cumulative_pnl: 0.0,
        label: START_LABEL.to_string(),
    });

    let mut running = 0.0;
    for (i, trade) in closed.iter().enumerate() {
        running += trade.realized_pnl;
        curve.push(EquityPoint {
            index: i + 1,
            cumulative_pnl: round2(running),
            label: trade.label(),
        });
    }
    curve
}

/// Last cumulative value of a curve, 0 for an empty one.
pub fn final_equity(curve: &[EquityPoint]) -> f64 {
    curve.last().map_or(0.0, |p| p.cumulative_pnl)
}
