use thiserror::Error;

/// Failures that indicate a caller handed the ledger something that is not a
/// trade collection at all. Dirty records inside a collection never end up here.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Journal input must be a list of trades, got {0}")]
    InvalidInput(&'static str),

    #[error("Journal input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
