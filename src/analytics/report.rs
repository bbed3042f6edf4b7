use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::breakdown::Dimension;
use crate::analytics::distribution::{outcome_distribution, DistributionSlice};
use crate::analytics::equity::{equity_curve, final_equity, EquityPoint};
use crate::analytics::patterns::{emotional_win_share, DimensionReport, WinShare};
use crate::analytics::summary::JournalSummary;
use crate::analytics::win_rate::{win_rate_series, WinRatePoint};
use crate::journal::TradeLedger;

/// Everything the dashboard's analytics and pattern pages display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_closed: usize,
    pub skipped_records: usize,
    pub equity_curve: Vec<EquityPoint>,
    pub win_rate_series: Vec<WinRatePoint>,
    pub distribution: Vec<DistributionSlice>,
    pub asset: DimensionReport,
    pub session: DimensionReport,
    pub emotional_state: DimensionReport,
    pub confluence_bucket: DimensionReport,
    pub emotional_win_share: Vec<WinShare>,
    pub summary: JournalSummary,
}

/// Stateless calculator: every call rebuilds the report from the ledger it is given.
#[derive(Debug, Default)]
pub struct JournalAnalyzer {}

impl JournalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(&self, ledger: &TradeLedger) -> AnalyticsReport {
        // One canonical ordering shared by every series and breakdown.
        let closed = ledger.closed_trades();

        let report = AnalyticsReport {
            total_closed: closed.len(),
            skipped_records: ledger.skipped(),
            equity_curve: equity_curve(&closed),
            win_rate_series: win_rate_series(&closed),
            distribution: outcome_distribution(&closed),
            asset: DimensionReport::for_dimension(Dimension::Asset, &closed),
            session: DimensionReport::for_dimension(Dimension::Session, &closed),
            emotional_state: DimensionReport::for_dimension(Dimension::EmotionalState, &closed),
            confluence_bucket: DimensionReport::for_dimension(Dimension::ConfluenceBucket, &closed),
            emotional_win_share: emotional_win_share(&closed),
            summary: JournalSummary::from_closed(ledger.len(), ledger.open_count(), &closed),
        };

        debug!(
            "Analytics computed: {} closed trades, final equity {:.2}, {} assets, {} sessions",
            report.total_closed,
            final_equity(&report.equity_curve),
            report.asset.categories.len(),
            report.session.categories.len()
        );
        report
    }
}

impl AnalyticsReport {
    /// False when there is nothing closed to chart.
    pub fn has_sufficient_data(&self) -> bool {
        self.total_closed > 0
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionReport {
        match dimension {
            Dimension::Asset => &self.asset,
            Dimension::Session => &self.session,
            Dimension::EmotionalState => &self.emotional_state,
            Dimension::ConfluenceBucket => &self.confluence_bucket,
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        println!("  JOURNAL ANALYTICS");
        println!("{}", "=".repeat(70));

        if !self.has_sufficient_data() {
            println!("  Insufficient data: no closed trades in the journal.");
            if self.skipped_records > 0 {
                println!("  ({} records skipped as malformed)", self.skipped_records);
            }
            println!("{}", "=".repeat(70));
            return;
        }

        let s = &self.summary;
        println!();
        println!("  OVERVIEW");
        println!("  ───────────────────────────────────");
        println!("  Entries:     {} ({} open, {} closed)", s.total_trades, s.open_trades, s.closed_trades);
        println!("  Won/Lost/BE: {} / {} / {}", s.won, s.lost, s.breakeven);
        println!("  Win Rate:    {:.2}%", s.win_rate_percent);
        println!("  Net P&L:     ${:+.2}", s.net_pnl);
        match s.profit_factor {
            Some(pf) => println!("  Profit Factor: {:.2}", pf),
            None => println!("  Profit Factor: n/a"),
        }
        println!("  Best/Worst:  ${:+.2} / ${:+.2}", s.best_trade, s.worst_trade);
        println!("  Streaks:     {} wins / {} losses", s.max_win_streak, s.max_loss_streak);
        if self.skipped_records > 0 {
            println!("  Skipped:     {} malformed records", self.skipped_records);
        }

        println!();
        println!("  OUTCOMES");
        println!("  ───────────────────────────────────");
        for slice in &self.distribution {
            println!("  {:>10}: {} ({:.2}%)", slice.category.as_str(), slice.value, slice.percent);
        }

        for dimension in Dimension::ALL {
            let report = self.dimension(dimension);
            println!();
            println!("  BY {}", dimension.title());
            println!("  ───────────────────────────────────");
            for c in &report.categories {
                println!(
                    "  {:>16}: {} trades | WR {:.2}% | PnL ${:+.2} | Avg ${:+.2}",
                    c.key, c.total_trades, c.win_rate_percent, c.total_pnl, c.avg_pnl
                );
            }
            if let (Some(best), Some(worst)) = (&report.best, &report.worst) {
                println!("  Best: {} | Worst: {}", best.key, worst.key);
            }
        }

        if !self.emotional_win_share.is_empty() {
            println!();
            println!("  WINS BY EMOTIONAL STATE");
            println!("  ───────────────────────────────────");
            for share in &self.emotional_win_share {
                println!(
                    "  {:>16}: {} wins ({:.2}% of wins)",
                    share.state, share.wins, share.share_percent
                );
            }
        }

        println!("{}", "=".repeat(70));
    }
}
