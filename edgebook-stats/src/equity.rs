//! Sequential-state reducers — equity curves and drawdown.
//!
//! Order-sensitive, unlike the basic reducers: callers pass trades sorted
//! ascending by `date` with a stable sort, so same-day trades keep their
//! insertion order (the record carries no finer ordering key).
//! `AnalyticsReport` performs that sort once for every section.

use chrono::NaiveDate;
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// One sample on the equity curve. Index 0 is the synthetic start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub index: usize,
    /// `None` only for the synthetic start point.
    pub date: Option<NaiveDate>,
    pub cumulative_r: f64,
    pub cumulative_pnl: f64,
}

fn start_point() -> EquityPoint {
    EquityPoint {
        index: 0,
        date: None,
        cumulative_r: 0.0,
        cumulative_pnl: 0.0,
    }
}

/// Per-trade equity curve on both ledgers, starting at 0/0.
pub fn equity_curve(trades: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut curve = Vec::with_capacity(trades.len() + 1);
    curve.push(start_point());
    let mut cumulative_r = 0.0;
    let mut cumulative_pnl = 0.0;
    for (i, trade) in trades.iter().enumerate() {
        cumulative_r += trade.r_multiple();
        cumulative_pnl += trade.pnl;
        curve.push(EquityPoint {
            index: i + 1,
            date: Some(trade.date),
            cumulative_r,
            cumulative_pnl,
        });
    }
    curve
}

/// Calendar-day equity curve: same-day trades are summed before the
/// cumulative step, so each sample is the close of one trading day.
pub fn daily_equity_curve(trades: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut curve = vec![start_point()];
    let mut cumulative_r = 0.0;
    let mut cumulative_pnl = 0.0;
    let mut open_day: Option<(NaiveDate, f64, f64)> = None;

    let mut flush = |day: (NaiveDate, f64, f64), curve: &mut Vec<EquityPoint>| {
        cumulative_r += day.1;
        cumulative_pnl += day.2;
        let index = curve.len();
        curve.push(EquityPoint {
            index,
            date: Some(day.0),
            cumulative_r,
            cumulative_pnl,
        });
    };

    for trade in trades {
        open_day = match open_day {
            Some((date, day_r, day_pnl)) if date == trade.date => {
                Some((date, day_r + trade.r_multiple(), day_pnl + trade.pnl))
            }
            Some(done) => {
                flush(done, &mut curve);
                Some((trade.date, trade.r_multiple(), trade.pnl))
            }
            None => Some((trade.date, trade.r_multiple(), trade.pnl)),
        };
    }
    if let Some(done) = open_day {
        flush(done, &mut curve);
    }
    curve
}

/// Worst peak-to-trough excursion on one ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDrawdown {
    /// `max(peak - cumulative)` over the scan, never negative.
    pub max_drawdown: f64,
    /// Curve index of the peak the worst excursion fell from.
    pub peak_index: usize,
    /// Curve index of the trough of the worst excursion.
    pub trough_index: usize,
}

/// Drawdown on both ledgers, tracked independently; the R and dollar
/// curves can peak and trough at different trades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawdownStats {
    pub r: LedgerDrawdown,
    pub dollars: LedgerDrawdown,
}

impl DrawdownStats {
    pub fn compute(curve: &[EquityPoint]) -> Self {
        Self {
            r: ledger_drawdown(curve, |p| p.cumulative_r),
            dollars: ledger_drawdown(curve, |p| p.cumulative_pnl),
        }
    }
}

fn ledger_drawdown(curve: &[EquityPoint], value: impl Fn(&EquityPoint) -> f64) -> LedgerDrawdown {
    let Some(first) = curve.first() else {
        return LedgerDrawdown::default();
    };
    let mut peak = value(first);
    let mut peak_index = 0;
    let mut worst = LedgerDrawdown::default();

    for (i, point) in curve.iter().enumerate() {
        let v = value(point);
        if v > peak {
            peak = v;
            peak_index = i;
        }
        let drawdown = peak - v;
        if drawdown > worst.max_drawdown {
            worst = LedgerDrawdown {
                max_drawdown: drawdown,
                peak_index,
                trough_index: i,
            };
        }
    }
    worst
}
