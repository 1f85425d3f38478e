//! Duration-bucket performance.
//!
//! Duration is `exit - entry` in minutes with overnight correction. A trade
//! missing either stamp, or carrying a stamp that does not parse, is
//! excluded from this view entirely; it still counts everywhere durations
//! are not needed.

use super::BucketStat;
use crate::config::Bands;
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One duration band and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationBand {
    pub label: String,
    pub stat: BucketStat,
}

/// Per-band aggregates over trade holding times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationPerformance {
    pub bands: Vec<DurationBand>,
    /// Trades excluded for missing or unparseable stamps.
    pub excluded: usize,
}

impl DurationPerformance {
    pub fn compute(trades: &[TradeRecord], bands: &Bands) -> Self {
        let mut out: Vec<DurationBand> = bands
            .labels("m")
            .into_iter()
            .map(|label| DurationBand {
                label,
                stat: BucketStat::default(),
            })
            .collect();
        let mut excluded = 0;

        for trade in trades {
            match trade.duration_minutes() {
                Some(minutes) => {
                    if let Some(band) = bands.classify(minutes as f64) {
                        out[band].stat.add(trade);
                    }
                }
                None => {
                    excluded += 1;
                    if trade.entry_time.is_some() && trade.exit_time.is_some() {
                        debug!(trade = %trade.id, "unparseable entry/exit stamp, excluded from duration view");
                    }
                }
            }
        }
        Self {
            bands: out,
            excluded,
        }
    }
}
