//! Bucketing reducers — partition a snapshot by one key, reduce per bucket.
//!
//! Bucket keys are typed: fixed tables for weekday, session and hour-of-day,
//! ordered boundary tables (`config::Bands`) for duration and risk. Labels
//! are rendered from the key or table in one place and never matched on.
//!
//! A trade missing the field a view partitions by is excluded from that view
//! only; it still counts everywhere the field is not needed.

pub mod duration;
pub mod histogram;
pub mod hour;
pub mod risk;
pub mod session;
pub mod weekday;

pub use duration::DurationPerformance;
pub use histogram::{PnlHistogram, RHistogram};
pub use hour::HourlyPerformance;
pub use risk::RiskPerformance;
pub use session::SessionPerformance;
pub use weekday::WeekdayPerformance;

use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// Per-bucket accumulator shared by every bucketing view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketStat {
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_pnl: f64,
    pub total_r: f64,
}

impl BucketStat {
    pub fn add(&mut self, trade: &TradeRecord) {
        self.trades += 1;
        if trade.is_win() {
            self.wins += 1;
        }
        if trade.is_loss() {
            self.losses += 1;
        }
        self.total_pnl += trade.pnl;
        self.total_r += trade.r_multiple();
    }

    /// Win rate over decided trades in this bucket; 0.0 when none.
    pub fn win_rate(&self) -> f64 {
        let decided = self.wins + self.losses;
        if decided == 0 {
            0.0
        } else {
            self.wins as f64 / decided as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use edgebook_core::domain::{AccountId, Direction, TradeId, TradeResult};

    fn make_trade(result: TradeResult, rr: f64, pnl: f64) -> TradeRecord {
        TradeRecord {
            id: TradeId::new("t"),
            account_id: AccountId::new("a"),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            entry_time: None,
            exit_time: None,
            session: None,
            asset: "EURUSD".into(),
            strategy: "breakout".into(),
            direction: Direction::Buy,
            entry_price: 100.0,
            stop_loss: 95.0,
            exit_price: 110.0,
            result,
            rr,
            pnl,
            account_size: 10_000.0,
            risk_percentage: Some(1.0),
            confidence: 5,
            mistakes: vec![],
            rules_followed: vec![],
        }
    }

    #[test]
    fn accumulates_both_ledgers() {
        let mut stat = BucketStat::default();
        stat.add(&make_trade(TradeResult::Win, 2.0, 150.0));
        stat.add(&make_trade(TradeResult::Loss, 1.0, -80.0));
        stat.add(&make_trade(TradeResult::BreakEven, 0.0, 0.0));

        assert_eq!(stat.trades, 3);
        assert_eq!(stat.wins, 1);
        assert_eq!(stat.losses, 1);
        assert!((stat.total_pnl - 70.0).abs() < 1e-10);
        assert!((stat.total_r - 1.0).abs() < 1e-10);
        assert!((stat.win_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn win_rate_neutral_without_decided_trades() {
        let mut stat = BucketStat::default();
        assert_eq!(stat.win_rate(), 0.0);
        stat.add(&make_trade(TradeResult::BreakEven, 0.0, 0.0));
        assert_eq!(stat.win_rate(), 0.0);
    }
}
