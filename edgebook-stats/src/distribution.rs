//! P&L distribution shape — CVaR, skewness, kurtosis.
//!
//! Complements `CompositeMetrics` with distribution-shape statistics for the
//! risk panels. All statistical fields are `None` below the observation
//! floor; a handful of journal trades says nothing about tail shape.

use crate::composite::{mean_f64, pop_std_dev};
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// Minimum trades before distribution shape is reported.
pub const MIN_TRADE_OBSERVATIONS: usize = 30;

const VARIANCE_FLOOR: f64 = 1e-15;

/// Distribution-shape statistics over per-trade pnl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlDistribution {
    /// Mean pnl of the worst 5% of trades (at least one).
    pub cvar_95: Option<f64>,
    /// Third standardized moment. Negative = heavier loss tail.
    pub skewness: Option<f64>,
    /// Excess kurtosis (fourth standardized moment - 3). Positive = fatter
    /// tails than normal.
    pub kurtosis: Option<f64>,
    /// Number of trades used.
    pub sample_size: usize,
}

impl PnlDistribution {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let pnls: Vec<f64> = trades.iter().map(|t| t.pnl).collect();
        let n = pnls.len();

        if n < MIN_TRADE_OBSERVATIONS {
            return Self {
                sample_size: n,
                ..Self::default()
            };
        }

        Self {
            cvar_95: Some(cvar_95(&pnls)),
            skewness: Some(standardized_moment(&pnls, 3)),
            kurtosis: Some(standardized_moment(&pnls, 4) - 3.0),
            sample_size: n,
        }
    }
}

/// Mean of the worst 5% of observations (at least one observation).
fn cvar_95(pnls: &[f64]) -> f64 {
    let mut sorted = pnls.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let cutoff = ((sorted.len() as f64 * 0.05).ceil() as usize).max(1);
    mean_f64(&sorted[..cutoff])
}

/// `(1/n) * sum(((x - mean)/std)^k)`, 0.0 when variance collapses.
fn standardized_moment(values: &[f64], k: i32) -> f64 {
    let n = values.len() as f64;
    let mean = mean_f64(values);
    let std = pop_std_dev(values);
    if std < VARIANCE_FLOOR {
        return if k == 4 { 3.0 } else { 0.0 };
    }
    values.iter().map(|v| ((v - mean) / std).powi(k)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use edgebook_core::domain::{AccountId, Direction, TradeId, TradeResult};

    fn trade_with_pnl(pnl: f64) -> TradeRecord {
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
            result: if pnl >= 0.0 { TradeResult::Win } else { TradeResult::Loss },
            rr: 1.0,
            pnl,
            account_size: 10_000.0,
            risk_percentage: Some(1.0),
            confidence: 5,
            mistakes: vec![],
            rules_followed: vec![],
        }
    }

    fn journal(pnls: &[f64]) -> Vec<TradeRecord> {
        pnls.iter().map(|&p| trade_with_pnl(p)).collect()
    }

    #[test]
    fn below_the_floor_reports_nothing() {
        let trades = journal(&vec![50.0; MIN_TRADE_OBSERVATIONS - 1]);
        let d = PnlDistribution::compute(&trades);
        assert_eq!(d.cvar_95, None);
        assert_eq!(d.skewness, None);
        assert_eq!(d.kurtosis, None);
        assert_eq!(d.sample_size, MIN_TRADE_OBSERVATIONS - 1);
    }

    #[test]
    fn empty_reports_nothing() {
        let d = PnlDistribution::compute(&[]);
        assert_eq!(d, PnlDistribution::default());
    }

    #[test]
    fn cvar_is_the_mean_of_the_worst_tail() {
        // 40 trades: two big losses, the rest small gains. Worst 5% of 40
        // is 2 observations → mean of the two losses.
        let mut pnls = vec![25.0; 38];
        pnls.push(-400.0);
        pnls.push(-200.0);
        let d = PnlDistribution::compute(&journal(&pnls));
        assert!((d.cvar_95.unwrap() - (-300.0)).abs() < 1e-10);
    }

    #[test]
    fn skewness_negative_for_heavy_loss_tail() {
        let mut pnls = vec![20.0; 50];
        for i in (0..50).step_by(10) {
            pnls[i] = -500.0;
        }
        let d = PnlDistribution::compute(&journal(&pnls));
        assert!(d.skewness.unwrap() < 0.0);
    }

    #[test]
    fn kurtosis_positive_for_fat_tails() {
        let mut pnls = vec![10.0; 60];
        pnls[0] = 900.0;
        pnls[30] = -900.0;
        let d = PnlDistribution::compute(&journal(&pnls));
        assert!(d.kurtosis.unwrap() > 0.0);
    }

    #[test]
    fn constant_pnl_reports_neutral_shape() {
        let d = PnlDistribution::compute(&journal(&vec![42.0; 40]));
        assert_eq!(d.skewness, Some(0.0));
        assert_eq!(d.kurtosis, Some(0.0));
        // CVaR stays defined: the worst 5% of identical trades is 42
        assert!((d.cvar_95.unwrap() - 42.0).abs() < 1e-10);
    }

    #[test]
    fn serialization_roundtrip() {
        let d = PnlDistribution {
            cvar_95: Some(-120.0),
            skewness: Some(-0.4),
            kurtosis: Some(1.1),
            sample_size: 60,
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: PnlDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
