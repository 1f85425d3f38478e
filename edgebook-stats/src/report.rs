//! The all-in-one analytics pass.

use edgebook_core::domain::TradeRecord;
use edgebook_core::fingerprint::{snapshot_hash, SnapshotHash};
use serde::{Deserialize, Serialize};

use crate::buckets::{
    DurationPerformance, HourlyPerformance, PnlHistogram, RHistogram, RiskPerformance,
    SessionPerformance, WeekdayPerformance,
};
use crate::composite::CompositeMetrics;
use crate::config::AnalyticsConfig;
use crate::distribution::PnlDistribution;
use crate::equity::{daily_equity_curve, equity_curve, DrawdownStats, EquityPoint};
use crate::streaks::StreakStats;
use crate::summary::TradeSummary;

/// Everything a dashboard needs, computed in one call.
///
/// The input snapshot is assumed pre-filtered (date range, account) by the
/// caller. A stable date sort happens once here before the order-sensitive
/// sections; individual reducers can also be called directly with a
/// caller-sorted slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Fingerprint of the input snapshot (pre-sort): the memoization key.
    pub snapshot: SnapshotHash,
    pub summary: TradeSummary,
    pub equity: Vec<EquityPoint>,
    pub daily_equity: Vec<EquityPoint>,
    pub drawdown: DrawdownStats,
    pub streaks: StreakStats,
    pub weekdays: WeekdayPerformance,
    pub sessions: SessionPerformance,
    pub durations: DurationPerformance,
    pub risk: RiskPerformance,
    pub r_histogram: RHistogram,
    pub pnl_histogram: PnlHistogram,
    pub hourly: HourlyPerformance,
    pub composite: CompositeMetrics,
    pub distribution: PnlDistribution,
}

impl AnalyticsReport {
    pub fn compute(trades: &[TradeRecord], config: &AnalyticsConfig) -> Self {
        let snapshot = snapshot_hash(trades);

        let mut ordered: Vec<TradeRecord> = trades.to_vec();
        // Stable: same-day trades keep their insertion order
        ordered.sort_by_key(|t| t.date);

        let equity = equity_curve(&ordered);
        let drawdown = DrawdownStats::compute(&equity);

        Self {
            snapshot,
            summary: TradeSummary::compute(&ordered),
            daily_equity: daily_equity_curve(&ordered),
            drawdown,
            streaks: StreakStats::compute(&ordered),
            weekdays: WeekdayPerformance::compute(&ordered),
            sessions: SessionPerformance::compute(&ordered),
            durations: DurationPerformance::compute(&ordered, &config.duration_bands),
            risk: RiskPerformance::compute(&ordered, &config.risk_bands),
            r_histogram: RHistogram::compute(&ordered, config.win_histogram_bins),
            pnl_histogram: PnlHistogram::compute(&ordered, config.pnl_histogram_target_bins),
            hourly: HourlyPerformance::compute(&ordered),
            composite: CompositeMetrics::compute(&ordered),
            distribution: PnlDistribution::compute(&ordered),
            equity,
        }
    }
}

/// Scalar selector for ranking reports (dashboard sort keys).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMetric {
    #[default]
    NetR,
    TotalPnl,
    WinRate,
    ProfitFactor,
    Expectancy,
    Sharpe,
}

impl SummaryMetric {
    /// Extract the metric from a report. `None`-guarded composites fall
    /// back to 0.0.
    pub fn extract(&self, report: &AnalyticsReport) -> f64 {
        match self {
            Self::NetR => report.summary.net_r,
            Self::TotalPnl => report.summary.total_pnl,
            Self::WinRate => report.summary.win_rate,
            Self::ProfitFactor => report.summary.profit_factor,
            Self::Expectancy => report.composite.expectancy_r.unwrap_or(0.0),
            Self::Sharpe => report.composite.sharpe.unwrap_or(0.0),
        }
    }
}
