use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::rounding::percent;
use crate::models::TradeEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinRatePoint {
    pub trade_number: usize,
    pub win_rate_percent: f64,
    pub date: Option<NaiveDate>,
}

/// Cumulative win rate after each closed trade. Breakeven trades count toward
/// the total but never as wins.
pub fn win_rate_series(closed: &[&TradeEntry]) -> Vec<WinRatePoint> {
    let mut wins = 0;
    closed
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            if trade.is_win() {
                wins += 1;
            }
            let trade_number = i + 1;
            WinRatePoint {
                trade_number,
                win_rate_percent: percent(wins, trade_number),
                date: trade.effective_time().map(|t| t.date_naive()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::test_helpers::{closed_trade, sequential_ledger};

    #[test]
    fn rolling_rate_counts_breakeven_in_denominator() {
        let ledger = sequential_ledger(&[
            ("BTC", Outcome::Won, 10.0),
            ("BTC", Outcome::Breakeven, 0.0),
            ("BTC", Outcome::Lost, -5.0),
            ("BTC", Outcome::Won, 7.0),
        ]);
        let series = win_rate_series(&ledger.closed_trades());
        let rates: Vec<f64> = series.iter().map(|p| p.win_rate_percent).collect();
        assert_eq!(rates, vec![100.0, 50.0, 33.33, 50.0]);
        assert_eq!(series[3].trade_number, 4);
        assert_eq!(
            series[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn undated_trades_have_no_date() {
        let trade = closed_trade("ETH", Outcome::Lost, -1.0);
        let series = win_rate_series(&[&trade]);
        assert_eq!(series[0].win_rate_percent, 0.0);
        assert_eq!(series[0].date, None);
    }

    #[test]
    fn rates_stay_within_bounds() {
        let outcomes = [Outcome::Won, Outcome::Lost, Outcome::Breakeven];
        let trades: Vec<_> = (0..50)
            .map(|i| closed_trade("BTC", outcomes[i % 3], i as f64))
            .collect();
        let refs: Vec<_> = trades.iter().collect();
        for point in win_rate_series(&refs) {
            assert!((0.0..=100.0).contains(&point.win_rate_percent));
        }
    }
}
