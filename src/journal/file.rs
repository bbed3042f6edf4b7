use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::journal::{JournalSource, TradeLedger};

/// Reads a journal export (the JSON the journal API returns) from disk.
pub struct JsonFileJournal {
    path: PathBuf,
}

impl JsonFileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JournalSource for JsonFileJournal {
    async fn load(&self) -> Result<TradeLedger> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading journal file {}", self.path.display()))?;

        let ledger = TradeLedger::from_json_str(&content)
            .with_context(|| format!("parsing journal file {}", self.path.display()))?;

        info!(
            "Loaded {} journal entries from {} ({} skipped)",
            ledger.len(),
            self.path.display(),
            ledger.skipped()
        );
        Ok(ledger)
    }
}
