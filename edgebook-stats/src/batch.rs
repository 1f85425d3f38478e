//! Grouped reports — one report per partition, computed in parallel.
//!
//! Partitions are independent snapshots, so every per-partition computation
//! stays pure and synchronous; rayon only maps over them. This is how a
//! dashboard compares strategies, assets, or accounts side by side.

use std::collections::HashMap;
use std::hash::Hash;

use edgebook_core::domain::{AccountId, TradeRecord};
use rayon::prelude::*;

use crate::config::AnalyticsConfig;
use crate::report::{AnalyticsReport, SummaryMetric};

/// Compute one report per group, keyed by `key_fn`.
pub fn grouped_reports<K, F>(
    trades: &[TradeRecord],
    key_fn: F,
    config: &AnalyticsConfig,
) -> HashMap<K, AnalyticsReport>
where
    K: Eq + Hash + Clone + Send,
    F: Fn(&TradeRecord) -> K,
{
    let mut groups: HashMap<K, Vec<TradeRecord>> = HashMap::new();
    for trade in trades {
        groups.entry(key_fn(trade)).or_default().push(trade.clone());
    }

    groups
        .into_par_iter()
        .map(|(key, group)| {
            let report = AnalyticsReport::compute(&group, config);
            (key, report)
        })
        .collect()
}

/// One report per strategy label.
pub fn reports_by_strategy(
    trades: &[TradeRecord],
    config: &AnalyticsConfig,
) -> HashMap<String, AnalyticsReport> {
    grouped_reports(trades, |t| t.strategy.clone(), config)
}

/// One report per asset.
pub fn reports_by_asset(
    trades: &[TradeRecord],
    config: &AnalyticsConfig,
) -> HashMap<String, AnalyticsReport> {
    grouped_reports(trades, |t| t.asset.clone(), config)
}

/// One report per owning account.
pub fn reports_by_account(
    trades: &[TradeRecord],
    config: &AnalyticsConfig,
) -> HashMap<AccountId, AnalyticsReport> {
    grouped_reports(trades, |t| t.account_id.clone(), config)
}

/// Rank groups by a metric, best first.
pub fn rank_groups<K: Clone>(
    reports: &HashMap<K, AnalyticsReport>,
    metric: SummaryMetric,
) -> Vec<(K, f64)> {
    let mut rows: Vec<(K, f64)> = reports
        .iter()
        .map(|(key, report)| (key.clone(), metric.extract(report)))
        .collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rows
}
