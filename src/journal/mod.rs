pub mod file;
pub mod ledger;
pub mod normalize;

pub use file::JsonFileJournal;
pub use ledger::TradeLedger;

use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand over a snapshot of the trade journal.
#[async_trait]
pub trait JournalSource: Send + Sync {
    async fn load(&self) -> Result<TradeLedger>;
}
