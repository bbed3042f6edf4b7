use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use journal_analytics::analytics::JournalAnalyzer;
use journal_analytics::config::{Config, OutputFormat};
use journal_analytics::journal::{JournalSource, JsonFileJournal};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = Config::from_env().apply_args(&args);

    // Logs go to stderr so JSON output on stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let source = JsonFileJournal::new(&cfg.journal_file);
    let ledger = source.load().await?;

    let report = JournalAnalyzer::new().analyze(&ledger);
    info!(
        "Analyzed {} closed trades ({} open)",
        report.total_closed, report.summary.open_trades
    );

    match cfg.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{}", json);
        }
        OutputFormat::Text => report.print_summary(),
    }

    Ok(())
}
