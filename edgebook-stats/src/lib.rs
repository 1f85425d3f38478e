//! Edgebook Stats — the trading-journal aggregation engine.
//!
//! Every reducer here is a pure, re-entrant function of a read-only snapshot
//! of trade records: same input, same output, no retained state, no I/O.
//! Callers own filtering (date range, account) and any memoization policy;
//! the snapshot fingerprint carried by `AnalyticsReport` is the key to
//! memoize by.
//!
//! - Basic reducers: `summary`
//! - Sequential-state reducers: `equity`, `streaks`
//! - Bucketing reducers: `buckets`
//! - Composite/derived metrics: `composite`, `distribution`
//! - One-call aggregate: `report`
//! - Per-partition parallel computation: `batch`
//! - Display formatting: `format`
//! - Boundary tables and histogram sizing: `config`

pub mod batch;
pub mod buckets;
pub mod composite;
pub mod config;
pub mod distribution;
pub mod equity;
pub mod format;
pub mod report;
pub mod streaks;
pub mod summary;

pub use batch::{grouped_reports, rank_groups};
pub use buckets::duration::DurationPerformance;
pub use buckets::histogram::{PnlHistogram, RHistogram};
pub use buckets::hour::HourlyPerformance;
pub use buckets::risk::RiskPerformance;
pub use buckets::session::SessionPerformance;
pub use buckets::weekday::WeekdayPerformance;
pub use buckets::BucketStat;
pub use composite::CompositeMetrics;
pub use config::{AnalyticsConfig, Bands, ConfigError};
pub use distribution::{PnlDistribution, MIN_TRADE_OBSERVATIONS};
pub use equity::{daily_equity_curve, equity_curve, DrawdownStats, EquityPoint, LedgerDrawdown};
pub use report::{AnalyticsReport, SummaryMetric};
pub use streaks::StreakStats;
pub use summary::TradeSummary;
