use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::journal::normalize::normalize_record;
use crate::models::{TradeEntry, TradeStatus};

/// Keys under which the journal API nests its list of entries.
const WRAPPER_KEYS: &[&str] = &["entries", "trades"];

/// Read-only, validated snapshot of the journal.
///
/// Entries keep the order they were supplied in. `closed_trades` hands out the
/// canonical chronological ordering every analytic is computed on.
#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    entries: Vec<TradeEntry>,
    skipped: usize,
}

impl TradeLedger {
    pub fn from_entries(entries: Vec<TradeEntry>) -> Self {
        Self {
            entries,
            skipped: 0,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LedgerError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Builds the ledger from a JSON array of records, or from an object that
    /// wraps one under `entries`/`trades`. Records that can't be normalized are
    /// skipped with a warning; only a non-list input is an error.
    pub fn from_value(value: &Value) -> Result<Self, LedgerError> {
        let records = match value {
            Value::Array(items) => items,
            Value::Object(obj) => WRAPPER_KEYS
                .iter()
                .find_map(|key| obj.get(*key).and_then(Value::as_array))
                .ok_or(LedgerError::InvalidInput("an object without a trade list"))?,
            other => return Err(LedgerError::InvalidInput(json_kind(other))),
        };

        let mut entries = Vec::with_capacity(records.len());
        let mut skipped = 0;
        for (idx, raw) in records.iter().enumerate() {
            match normalize_record(raw) {
                Ok(entry) => entries.push(entry),
                Err(issue) => {
                    warn!("Skipping journal record #{}: {}", idx, issue);
                    skipped += 1;
                }
            }
        }

        debug!(
            "Ledger loaded: {} records accepted, {} skipped",
            entries.len(),
            skipped
        );
        Ok(Self { entries, skipped })
    }

    pub fn entries(&self) -> &[TradeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of raw records rejected during normalization.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn open_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|t| t.status == TradeStatus::Open)
            .count()
    }

    /// CLOSED trades ordered by close time (open time as fallback). Trades
    /// without any parsable timestamp go last; ties keep their original order.
    pub fn closed_trades(&self) -> Vec<&TradeEntry> {
        let mut closed: Vec<&TradeEntry> = self.entries.iter().filter(|t| t.is_closed()).collect();
        // Option orders None first, so flip the presence flag to push it last.
        closed.sort_by_key(|t| {
            let ts = t.effective_time();
            (ts.is_none(), ts)
        });
        closed
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::test_helpers::{closed_trade, closed_trade_at, open_trade};
    use serde_json::json;

    #[test]
    fn rejects_non_list_input() {
        assert!(matches!(
            TradeLedger::from_value(&json!("BTC")),
            Err(LedgerError::InvalidInput("a string"))
        ));
        assert!(matches!(
            TradeLedger::from_value(&json!({"total": 3})),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            TradeLedger::from_json_str("{not json"),
            Err(LedgerError::Json(_))
        ));
    }

    #[test]
    fn accepts_wrapped_entry_list() {
        let raw = json!({
            "total": 1, "page": 1, "limit": 50,
            "entries": [{"activo": "BTC", "estatus": "Cerrado", "resultado": "Ganado"}]
        });
        let ledger = TradeLedger::from_value(&raw).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.closed_trades().len(), 1);
    }

    #[test]
    fn skips_malformed_records_without_failing() {
        let raw = json!([
            {"asset": "BTC", "status": "CLOSED", "outcome": "WON"},
            "garbage",
            {"asset": "ETH"},
            {"asset": "SOL", "status": "OPEN"}
        ]);
        let ledger = TradeLedger::from_value(&raw).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.skipped(), 2);
        assert_eq!(ledger.open_count(), 1);
        assert_eq!(ledger.closed_trades().len(), 1);
    }

    #[test]
    fn closed_trades_sorted_with_undated_last() {
        let ledger = TradeLedger::from_entries(vec![
            closed_trade("UNDATED", Outcome::Won, 1.0),
            closed_trade_at("LATE", Outcome::Won, 1.0, 5),
            open_trade("OPEN"),
            closed_trade_at("EARLY", Outcome::Lost, -1.0, 1),
        ]);
        let order: Vec<&str> = ledger
            .closed_trades()
            .iter()
            .map(|t| t.asset.as_str())
            .collect();
        assert_eq!(order, vec!["EARLY", "LATE", "UNDATED"]);
    }

    #[test]
    fn open_time_is_used_when_close_time_missing() {
        let mut fallback = closed_trade_at("FALLBACK", Outcome::Won, 1.0, 3);
        fallback.closed_at = None;
        // opened_at is 30 minutes before the hour-3 close, so it sorts after hour 2
        let ledger = TradeLedger::from_entries(vec![
            closed_trade_at("FOUR", Outcome::Won, 1.0, 4),
            fallback,
            closed_trade_at("TWO", Outcome::Won, 1.0, 2),
        ]);
        let order: Vec<&str> = ledger
            .closed_trades()
            .iter()
            .map(|t| t.asset.as_str())
            .collect();
        assert_eq!(order, vec!["TWO", "FALLBACK", "FOUR"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let ledger = TradeLedger::from_entries(vec![
            closed_trade_at("A", Outcome::Won, 1.0, 1),
            closed_trade_at("B", Outcome::Won, 1.0, 1),
            closed_trade("C", Outcome::Won, 1.0),
            closed_trade("D", Outcome::Won, 1.0),
        ]);
        let order: Vec<&str> = ledger
            .closed_trades()
            .iter()
            .map(|t| t.asset.as_str())
            .collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }
}
