use serde::{Deserialize, Serialize};

use crate::analytics::rounding::{percent, round2};
use crate::journal::TradeLedger;
use crate::models::{Outcome, TradeEntry};

/// Headline numbers shown above the journal table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSummary {
    pub total_trades: usize,
    pub open_trades: usize,
    pub closed_trades: usize,
    pub won: usize,
    pub lost: usize,
    pub breakeven: usize,
    pub win_rate_percent: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub net_pnl: f64,
    /// None when nothing was lost.
    pub profit_factor: Option<f64>,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
}

impl JournalSummary {
    pub fn from_ledger(ledger: &TradeLedger) -> Self {
        let closed = ledger.closed_trades();
        Self::from_closed(ledger.len(), ledger.open_count(), &closed)
    }

    /// `closed` must be in canonical order for the streaks to mean anything.
    pub fn from_closed(total_trades: usize, open_trades: usize, closed: &[&TradeEntry]) -> Self {
        let count = |o: Outcome| closed.iter().filter(|t| t.outcome == Some(o)).count();
        let won = count(Outcome::Won);

        let gross_profit: f64 = closed
            .iter()
            .map(|t| t.realized_pnl)
            .filter(|p| *p > 0.0)
            .sum();
        let gross_loss: f64 = closed
            .iter()
            .map(|t| t.realized_pnl)
            .filter(|p| *p < 0.0)
            .sum::<f64>()
            .abs();
        let net_pnl: f64 = closed.iter().map(|t| t.realized_pnl).sum();

        let profit_factor = if gross_loss > 0.0 {
            Some(round2(gross_profit / gross_loss))
        } else {
            None
        };

        let (best_trade, worst_trade) = if closed.is_empty() {
            (0.0, 0.0)
        } else {
            (
                closed
                    .iter()
                    .map(|t| t.realized_pnl)
                    .fold(f64::NEG_INFINITY, f64::max),
                closed
                    .iter()
                    .map(|t| t.realized_pnl)
                    .fold(f64::INFINITY, f64::min),
            )
        };

        let (max_win_streak, max_loss_streak) = streaks(closed);

        JournalSummary {
            total_trades,
            open_trades,
            closed_trades: closed.len(),
            won,
            lost: count(Outcome::Lost),
            breakeven: count(Outcome::Breakeven),
            win_rate_percent: percent(won, closed.len()),
            gross_profit: round2(gross_profit),
            gross_loss: round2(gross_loss),
            net_pnl: round2(net_pnl),
            profit_factor,
            best_trade: round2(best_trade),
            worst_trade: round2(worst_trade),
            max_win_streak,
            max_loss_streak,
        }
    }
}

/// Longest runs of consecutive wins and losses. A breakeven ends both runs.
fn streaks(closed: &[&TradeEntry]) -> (usize, usize) {
    let mut max_wins = 0;
    let mut max_losses = 0;
    let mut current_wins = 0;
    let mut current_losses = 0;

    for trade in closed {
        match trade.outcome {
            Some(Outcome::Won) => {
                current_wins += 1;
                current_losses = 0;
                max_wins = max_wins.max(current_wins);
            }
            Some(Outcome::Lost) => {
                current_losses += 1;
                current_wins = 0;
                max_losses = max_losses.max(current_losses);
            }
            _ => {
                current_wins = 0;
                current_losses = 0;
            }
        }
    }

    (max_wins, max_losses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{closed_trade_at, open_trade, sequential_ledger};

    #[test]
    fn empty_ledger_summary_is_zeroed() {
        let summary = JournalSummary::from_ledger(&TradeLedger::default());
        assert_eq!(summary, JournalSummary::default());
    }

    #[test]
    fn counts_totals_and_profit_factor() {
        let ledger = sequential_ledger(&[
            ("BTC", Outcome::Won, 120.0),
            ("ETH", Outcome::Lost, -40.0),
            ("BTC", Outcome::Breakeven, 0.0),
            ("SOL", Outcome::Lost, -20.0),
        ]);
        let summary = JournalSummary::from_ledger(&ledger);
        assert_eq!(summary.closed_trades, 4);
        assert_eq!(summary.won, 1);
        assert_eq!(summary.lost, 2);
        assert_eq!(summary.breakeven, 1);
        assert_eq!(summary.win_rate_percent, 25.0);
        assert_eq!(summary.gross_profit, 120.0);
        assert_eq!(summary.gross_loss, 60.0);
        assert_eq!(summary.net_pnl, 60.0);
        assert_eq!(summary.profit_factor, Some(2.0));
        assert_eq!(summary.best_trade, 120.0);
        assert_eq!(summary.worst_trade, -40.0);
    }

    #[test]
    fn profit_factor_absent_without_losses() {
        let ledger = sequential_ledger(&[("BTC", Outcome::Won, 5.0)]);
        assert_eq!(JournalSummary::from_ledger(&ledger).profit_factor, None);
    }

    #[test]
    fn streaks_follow_chronological_order() {
        let ledger = TradeLedger::from_entries(vec![
            closed_trade_at("A", Outcome::Lost, -1.0, 6),
            closed_trade_at("B", Outcome::Won, 1.0, 1),
            closed_trade_at("C", Outcome::Won, 1.0, 2),
            closed_trade_at("D", Outcome::Breakeven, 0.0, 3),
            closed_trade_at("E", Outcome::Won, 1.0, 4),
            closed_trade_at("F", Outcome::Lost, -1.0, 5),
            open_trade("G"),
        ]);
        let summary = JournalSummary::from_ledger(&ledger);
        assert_eq!(summary.max_win_streak, 2);
        assert_eq!(summary.max_loss_streak, 2);
        assert_eq!(summary.total_trades, 7);
        assert_eq!(summary.open_trades, 1);
    }
}
