//! Risk-percentage bucket performance.

use super::BucketStat;
use crate::config::Bands;
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// One risk band and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    pub label: String,
    pub stat: BucketStat,
}

/// Per-band aggregates over the risk taken per trade.
///
/// Trades with no `risk_percentage`, or a non-positive one, are excluded
/// from this view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPerformance {
    pub bands: Vec<RiskBand>,
    pub excluded: usize,
}

impl RiskPerformance {
    pub fn compute(trades: &[TradeRecord], bands: &Bands) -> Self {
        let mut out: Vec<RiskBand> = bands
            .labels("%")
            .into_iter()
            .map(|label| RiskBand {
                label,
                stat: BucketStat::default(),
            })
            .collect();
        let mut excluded = 0;

        for trade in trades {
            match trade.risk_percentage {
                Some(risk) if risk > 0.0 => {
                    if let Some(band) = bands.classify(risk) {
                        out[band].stat.add(trade);
                    }
                }
                _ => excluded += 1,
            }
        }
        Self {
            bands: out,
            excluded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsConfig;
    use chrono::NaiveDate;
    use edgebook_core::domain::{AccountId, Direction, TradeId, TradeResult};

    fn trade_with_risk(risk_percentage: Option<f64>) -> TradeRecord {
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
            result: TradeResult::Win,
            rr: 1.0,
            pnl: 50.0,
            account_size: 10_000.0,
            risk_percentage,
            confidence: 5,
            mistakes: vec![],
            rules_followed: vec![],
        }
    }

    fn default_bands() -> Bands {
        AnalyticsConfig::default().risk_bands
    }

    #[test]
    fn buckets_by_risk_band() {
        let perf = RiskPerformance::compute(
            &[
                trade_with_risk(Some(0.5)),
                trade_with_risk(Some(1.5)),
                trade_with_risk(Some(5.0)),
            ],
            &default_bands(),
        );
        assert_eq!(perf.bands[0].label, "0-1%");
        assert_eq!(perf.bands[0].stat.trades, 1);
        assert_eq!(perf.bands[1].stat.trades, 1);
        assert_eq!(perf.bands[2].label, ">2.5%");
        assert_eq!(perf.bands[2].stat.trades, 1);
    }

    #[test]
    fn missing_or_non_positive_risk_is_excluded() {
        let perf = RiskPerformance::compute(
            &[
                trade_with_risk(None),
                trade_with_risk(Some(0.0)),
                trade_with_risk(Some(-1.0)),
                trade_with_risk(Some(1.0)),
            ],
            &default_bands(),
        );
        assert_eq!(perf.excluded, 3);
        let bucketed: usize = perf.bands.iter().map(|b| b.stat.trades).sum();
        assert_eq!(bucketed, 1);
    }

    #[test]
    fn empty_has_all_bands_at_zero() {
        let perf = RiskPerformance::compute(&[], &default_bands());
        assert_eq!(perf.bands.len(), 3);
        assert!(perf.bands.iter().all(|b| b.stat.trades == 0));
    }
}
