//! Hour-of-day performance.

use super::BucketStat;
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// Per-hour aggregates keyed by the hour of the entry stamp, always 24
/// buckets. Trades without a parseable `entry_time` are excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPerformance {
    /// Indexed by hour 0..=23.
    pub hours: [BucketStat; 24],
    pub excluded: usize,
}

impl HourlyPerformance {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut hours = [BucketStat::default(); 24];
        let mut excluded = 0;
        for trade in trades {
            match trade.entry_clock() {
                Some(clock) => hours[clock.hour() as usize].add(trade),
                None => excluded += 1,
            }
        }
        Self { hours, excluded }
    }
}
