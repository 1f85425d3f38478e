//! Outcome histograms — R-multiple and P&L distribution views.

use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// One win bin of the R-multiple histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// R-multiple histogram: a single fixed bucket for losses (every loss sits
/// at exactly -1R by the ledger convention) plus win bins spanning
/// `[0, max observed rr]`.
///
/// Win bins are half-open `[start, end)` except the final bin, which is
/// closed, so a trade whose `rr` equals the observed maximum always lands in
/// the top bin. Break-even and missed trades appear in neither part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RHistogram {
    /// Count of losses; they all sit at exactly -1R.
    pub loss_count: usize,
    pub win_bins: Vec<RBin>,
}

impl RHistogram {
    pub fn compute(trades: &[TradeRecord], bin_count: usize) -> Self {
        let loss_count = trades.iter().filter(|t| t.is_loss()).count();
        let win_rs: Vec<f64> = trades
            .iter()
            .filter(|t| t.is_win())
            .map(|t| t.rr)
            .collect();

        if win_rs.is_empty() || bin_count == 0 {
            return Self {
                loss_count,
                win_bins: Vec::new(),
            };
        }

        let max_r = win_rs.iter().fold(0.0_f64, |a, &b| a.max(b));
        if max_r <= 0.0 {
            // Every win was logged at 0R: one degenerate bin holds them all
            return Self {
                loss_count,
                win_bins: vec![RBin {
                    start: 0.0,
                    end: 0.0,
                    count: win_rs.len(),
                }],
            };
        }

        let width = max_r / bin_count as f64;
        let mut win_bins: Vec<RBin> = (0..bin_count)
            .map(|i| RBin {
                start: i as f64 * width,
                end: (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for r in win_rs {
            let mut bin = (r / width).floor() as usize;
            if bin >= bin_count {
                bin = bin_count - 1;
            }
            win_bins[bin].count += 1;
        }
        Self {
            loss_count,
            win_bins,
        }
    }

    pub fn win_count(&self) -> usize {
        self.win_bins.iter().map(|b| b.count).sum()
    }
}

/// Counts for one magnitude band `[start, end)` of `|pnl|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlBin {
    pub start: f64,
    pub end: f64,
    pub win_count: i64,
    /// Negated count of losing trades in this band.
    pub loss_count: i64,
}

/// Symmetric "butterfly" P&L histogram: magnitude bins of a nice width, win
/// counts positive and loss counts negated so the two sides mirror around
/// zero in a chart. Trades with `pnl == 0` appear on neither side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlHistogram {
    pub bin_size: f64,
    pub bins: Vec<PnlBin>,
}

/// Bin width from the maximum absolute pnl, rounded up to a multiple of 10
/// and never below 10.
pub fn nice_bin_size(max_abs_pnl: f64, target_bins: usize) -> f64 {
    if max_abs_pnl <= 0.0 || target_bins == 0 {
        return 10.0;
    }
    let raw = max_abs_pnl / target_bins as f64;
    ((raw / 10.0).ceil() * 10.0).max(10.0)
}

impl PnlHistogram {
    pub fn compute(trades: &[TradeRecord], target_bins: usize) -> Self {
        let max_abs = trades.iter().fold(0.0_f64, |a, t| a.max(t.pnl.abs()));
        let bin_size = nice_bin_size(max_abs, target_bins);
        if max_abs <= 0.0 {
            return Self {
                bin_size,
                bins: Vec::new(),
            };
        }

        let bin_count = (max_abs / bin_size).ceil().max(1.0) as usize;
        let mut bins: Vec<PnlBin> = (0..bin_count)
            .map(|i| PnlBin {
                start: i as f64 * bin_size,
                end: (i + 1) as f64 * bin_size,
                win_count: 0,
                loss_count: 0,
            })
            .collect();

        for trade in trades {
            if trade.pnl == 0.0 {
                continue;
            }
            let mut bin = (trade.pnl.abs() / bin_size).floor() as usize;
            if bin >= bin_count {
                bin = bin_count - 1;
            }
            if trade.pnl > 0.0 {
                bins[bin].win_count += 1;
            } else {
                bins[bin].loss_count -= 1;
            }
        }
        Self { bin_size, bins }
    }
}
