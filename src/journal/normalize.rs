use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::trade::direction_from_suffix;
use crate::models::{Direction, Outcome, Session, TradeEntry, TradeStatus};

// Field names as the journal service emits them come after the English ones.
const ID: &[&str] = &["id"];
const ASSET: &[&str] = &["asset", "activo", "symbol"];
const DIRECTION: &[&str] = &["direction", "operacion"];
const STATUS: &[&str] = &["status", "estatus"];
const OUTCOME: &[&str] = &["outcome", "resultado"];
const REALIZED_PNL: &[&str] = &["realizedPnL", "realized_pnl", "ganancia_perdida_real", "pnl_real", "pnl"];
const OPENED_AT: &[&str] = &["openedAt", "opened_at", "fecha_operacion", "fecha_apertura"];
const CLOSED_AT: &[&str] = &["closedAt", "closed_at", "fecha_finalizacion", "fecha_cierre"];
const SESSION: &[&str] = &["session", "sesion"];
const EMOTIONAL_STATE: &[&str] = &["emotionalState", "emotional_state", "estado_emocional"];
const CONFLUENCE: &[&str] = &[
    "confluencePercentage",
    "confluence_percentage",
    "confluencia_porcentaje",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Why a raw record could not be turned into a `TradeEntry`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordIssue {
    #[error("record is not an object")]
    NotAnObject,
    #[error("record has no recognizable status")]
    MissingStatus,
    #[error("closed record has no recognizable outcome")]
    MissingOutcome,
}

pub fn normalize_record(raw: &Value) -> Result<TradeEntry, RecordIssue> {
    let obj = raw.as_object().ok_or(RecordIssue::NotAnObject)?;

    let status = text(field(obj, STATUS))
        .and_then(|s| TradeStatus::parse(&s))
        .ok_or(RecordIssue::MissingStatus)?;

    let outcome = match status {
        TradeStatus::Closed => Some(
            text(field(obj, OUTCOME))
                .and_then(|s| Outcome::parse(&s))
                .ok_or(RecordIssue::MissingOutcome)?,
        ),
        TradeStatus::Open => None,
    };

    let asset = text(field(obj, ASSET)).unwrap_or_default();
    let direction = text(field(obj, DIRECTION))
        .and_then(|s| Direction::parse(&s))
        .or_else(|| direction_from_suffix(&asset));

    Ok(TradeEntry {
        id: text(field(obj, ID)),
        direction,
        status,
        outcome,
        realized_pnl: number(field(obj, REALIZED_PNL)),
        opened_at: timestamp(field(obj, OPENED_AT)),
        closed_at: timestamp(field(obj, CLOSED_AT)),
        session: text(field(obj, SESSION)).and_then(|s| Session::parse(&s)),
        emotional_state: text(field(obj, EMOTIONAL_STATE)),
        confluence_percentage: number(field(obj, CONFLUENCE)),
        asset,
    })
}

/// First alias present with a non-null value.
fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|v| !v.is_null())
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numbers or numeric strings; anything else, including NaN/inf, becomes 0.
pub fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite()).unwrap_or(0.0)
}

pub fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
