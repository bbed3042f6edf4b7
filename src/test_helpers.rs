use chrono::{DateTime, Duration, Utc};

use crate::journal::TradeLedger;
use crate::models::{Outcome, Session, TradeEntry, TradeStatus};

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A closed trade with no timestamps, no session and 60% confluence.
pub fn closed_trade(asset: &str, outcome: Outcome, pnl: f64) -> TradeEntry {
    TradeEntry {
        id: None,
        asset: asset.to_string(),
        direction: None,
        status: TradeStatus::Closed,
        outcome: Some(outcome),
        realized_pnl: pnl,
        opened_at: None,
        closed_at: None,
        session: None,
        emotional_state: None,
        confluence_percentage: 60.0,
    }
}

/// A closed trade that was closed `hours` after the shared base time.
pub fn closed_trade_at(asset: &str, outcome: Outcome, pnl: f64, hours: i64) -> TradeEntry {
    let closed = base_time() + Duration::hours(hours);
    TradeEntry {
        opened_at: Some(closed - Duration::minutes(30)),
        closed_at: Some(closed),
        ..closed_trade(asset, outcome, pnl)
    }
}

pub fn open_trade(asset: &str) -> TradeEntry {
    TradeEntry {
        status: TradeStatus::Open,
        outcome: None,
        realized_pnl: 0.0,
        opened_at: Some(base_time()),
        ..closed_trade(asset, Outcome::Won, 0.0)
    }
}

pub fn with_session(mut trade: TradeEntry, session: Session) -> TradeEntry {
    trade.session = Some(session);
    trade
}

pub fn with_state(mut trade: TradeEntry, state: &str) -> TradeEntry {
    trade.emotional_state = Some(state.to_string());
    trade
}

pub fn with_confluence(mut trade: TradeEntry, pct: f64) -> TradeEntry {
    trade.confluence_percentage = pct;
    trade
}

/// Ledger of trades closed one hour apart, in the given order.
pub fn sequential_ledger(trades: &[(&str, Outcome, f64)]) -> TradeLedger {
    let entries = trades
        .iter()
        .enumerate()
        .map(|(i, &(asset, outcome, pnl))| closed_trade_at(asset, outcome, pnl, i as i64))
        .collect();
    TradeLedger::from_entries(entries)
}
