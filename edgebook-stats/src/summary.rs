//! Basic reducers — single-pass scalar aggregates over a snapshot.
//!
//! Classification comes from `result` alone; the dollar aggregates come from
//! the sign of `pnl`. The two ledgers are independent by design and may
//! disagree on a manually overridden trade.

use edgebook_core::domain::{TradeRecord, TradeResult};
use serde::{Deserialize, Serialize};

/// Scalar aggregates for a snapshot of trades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    /// Every record, break-even and missed included (the "Total Trades" card).
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_evens: usize,
    pub missed: usize,
    /// `wins / (wins + losses)`; 0.0 when no decided trades.
    pub win_rate: f64,
    pub total_pnl: f64,
    /// Sum of positive pnl.
    pub gross_profit: f64,
    /// Sum of negative pnl, kept signed.
    pub gross_loss: f64,
    /// Mean positive pnl; 0.0 when there are none.
    pub avg_win: f64,
    /// Mean negative pnl (signed); 0.0 when there are none.
    pub avg_loss: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    /// `gross_profit / |gross_loss|`; `+∞` on profit with zero loss, 0 when
    /// both sides are zero.
    pub profit_factor: f64,
    /// Sum of `r_multiple()`: wins `+rr`, losses exactly `-1`, the rest 0.
    pub net_r: f64,
}

impl TradeSummary {
    /// Compute every field in one pass.
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut summary = Self {
            total: trades.len(),
            ..Self::default()
        };
        let mut winning_pnl_count = 0usize;
        let mut losing_pnl_count = 0usize;

        for trade in trades {
            match trade.result {
                TradeResult::Win => summary.wins += 1,
                TradeResult::Loss => summary.losses += 1,
                TradeResult::BreakEven => summary.break_evens += 1,
                TradeResult::Missed => summary.missed += 1,
            }
            summary.net_r += trade.r_multiple();
            summary.total_pnl += trade.pnl;

            if trade.pnl > 0.0 {
                summary.gross_profit += trade.pnl;
                winning_pnl_count += 1;
                summary.largest_win = summary.largest_win.max(trade.pnl);
            } else if trade.pnl < 0.0 {
                summary.gross_loss += trade.pnl;
                losing_pnl_count += 1;
                summary.largest_loss = summary.largest_loss.min(trade.pnl);
            }
        }

        let decided = summary.wins + summary.losses;
        if decided > 0 {
            summary.win_rate = summary.wins as f64 / decided as f64;
        }
        if winning_pnl_count > 0 {
            summary.avg_win = summary.gross_profit / winning_pnl_count as f64;
        }
        if losing_pnl_count > 0 {
            summary.avg_loss = summary.gross_loss / losing_pnl_count as f64;
        }
        summary.profit_factor = profit_factor(summary.gross_profit, summary.gross_loss);
        summary
    }

    /// Trades that settle the win/loss question.
    pub fn decided(&self) -> usize {
        self.wins + self.losses
    }
}

/// `gross_profit / |gross_loss|` with the degenerate cases pinned:
/// zero loss with profit → `+∞`, zero loss with zero profit → 0.
pub fn profit_factor(gross_profit: f64, gross_loss: f64) -> f64 {
    if gross_loss == 0.0 {
        return if gross_profit > 0.0 { f64::INFINITY } else { 0.0 };
    }
    (gross_profit / gross_loss).abs()
}
