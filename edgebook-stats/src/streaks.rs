//! Win/loss streak tracking.

use edgebook_core::domain::{TradeRecord, TradeResult};
use serde::{Deserialize, Serialize};

/// Streak state after scanning a date-ordered snapshot.
///
/// At every point of the scan at most one of the current streaks is nonzero.
/// A break-even or missed trade resets both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    pub current_win_streak: usize,
    pub current_loss_streak: usize,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
}

impl StreakStats {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut streaks = Self::default();
        for trade in trades {
            match trade.result {
                TradeResult::Win => {
                    streaks.current_win_streak += 1;
                    streaks.current_loss_streak = 0;
                }
                TradeResult::Loss => {
                    streaks.current_loss_streak += 1;
                    streaks.current_win_streak = 0;
                }
                TradeResult::BreakEven | TradeResult::Missed => {
                    streaks.current_win_streak = 0;
                    streaks.current_loss_streak = 0;
                }
            }
            streaks.max_win_streak = streaks.max_win_streak.max(streaks.current_win_streak);
            streaks.max_loss_streak = streaks.max_loss_streak.max(streaks.current_loss_streak);
        }
        streaks
    }
}
