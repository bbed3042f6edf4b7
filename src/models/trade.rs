use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Outcome, Session, TradeStatus};

/// Category used whenever a grouping key is blank or missing.
pub const UNKNOWN_CATEGORY: &str = "Desconocido";

const LEGACY_SUFFIXES: &[&str] = &[" LONG", " SHORT"];

/// A journal entry after normalization. Numeric fields are already coerced,
/// unparsable timestamps are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub asset: String,
    #[serde(default)]
    pub direction: Option<Direction>,
    pub status: TradeStatus,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub realized_pnl: f64,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub emotional_state: Option<String>,
    #[serde(default)]
    pub confluence_percentage: f64,
}

impl TradeEntry {
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    pub fn is_win(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_win())
    }

    /// Timestamp used for ordering: close time, falling back to open time.
    pub fn effective_time(&self) -> Option<DateTime<Utc>> {
        self.closed_at.or(self.opened_at)
    }

    /// Asset label without the legacy " LONG"/" SHORT" suffix.
    pub fn asset_key(&self) -> String {
        let key = strip_direction_suffix(&self.asset).trim();
        if key.is_empty() {
            UNKNOWN_CATEGORY.to_string()
        } else {
            key.to_string()
        }
    }

    pub fn session_key(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.label().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
    }

    pub fn emotional_state_key(&self) -> String {
        self.emotional_state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
    }

    /// Chart label, e.g. "BTC - WON".
    pub fn label(&self) -> String {
        let outcome = self.outcome.map_or(UNKNOWN_CATEGORY, |o| o.as_str());
        format!("{} - {}", self.asset_key(), outcome)
    }
}

pub fn strip_direction_suffix(asset: &str) -> &str {
    let trimmed = asset.trim_end();
    for suffix in LEGACY_SUFFIXES {
        if let Some(stripped) = trimmed.strip_suffix(suffix) {
            return stripped;
        }
    }
    trimmed
}

/// Direction implied by a legacy asset label such as "ETH SHORT".
pub fn direction_from_suffix(asset: &str) -> Option<Direction> {
    let trimmed = asset.trim_end();
    if trimmed.ends_with(" LONG") {
        Some(Direction::Long)
    } else if trimmed.ends_with(" SHORT") {
        Some(Direction::Short)
    } else {
        None
    }
}
