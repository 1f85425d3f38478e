//! Composite metrics — statistics derived from the basic aggregates.
//!
//! Degenerate inputs (fewer than two trades, zero variance, no decided
//! trades) yield `None`, which the formatting layer renders as "N/A". No
//! NaN or infinity escapes into a report from here.

use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};

/// Average loss in R terms is exactly -1 by the ledger convention.
pub const AVG_LOSS_R: f64 = -1.0;

const VARIANCE_FLOOR: f64 = 1e-15;

/// Derived statistics over a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeMetrics {
    /// Expected R per decided trade:
    /// `win_rate * avg_win_r - loss_rate * |AVG_LOSS_R|`.
    pub expectancy_r: Option<f64>,
    /// `|avg_win_r / avg_loss_r|`.
    pub risk_reward_ratio: Option<f64>,
    /// `mean(R) / stddev(R)` over all trades, population stddev.
    pub sharpe: Option<f64>,
    /// System Quality Number: `(expectancy / stddev(R)) * sqrt(N)`.
    pub sqn: Option<f64>,
    /// `(mean(pnl) / stddev(pnl)) * 100`.
    pub consistency: Option<f64>,
}

impl CompositeMetrics {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let wins: Vec<f64> = trades.iter().filter(|t| t.is_win()).map(|t| t.rr).collect();
        let losses = trades.iter().filter(|t| t.is_loss()).count();
        let decided = wins.len() + losses;

        let (expectancy_r, risk_reward_ratio) = if decided > 0 {
            let win_rate = wins.len() as f64 / decided as f64;
            let loss_rate = 1.0 - win_rate;
            let avg_win_r = mean_f64(&wins);
            (
                Some(win_rate * avg_win_r - loss_rate * AVG_LOSS_R.abs()),
                Some((avg_win_r / AVG_LOSS_R).abs()),
            )
        } else {
            (None, None)
        };

        // The R and pnl series cover ALL trades; break-even and missed
        // contribute 0R, so they dampen variance rather than vanish.
        let r_series: Vec<f64> = trades.iter().map(|t| t.r_multiple()).collect();
        let r_std = pop_std_dev(&r_series);
        let sharpe = guarded_ratio(mean_f64(&r_series), r_std, r_series.len());

        // SQN keeps expectancy on its decided-trades basis while stddev and
        // N span the full ledger, matching the Sharpe basis above.
        let sqn = match expectancy_r {
            Some(e) if r_series.len() >= 2 && r_std > VARIANCE_FLOOR => {
                Some(e / r_std * (r_series.len() as f64).sqrt())
            }
            _ => None,
        };

        let pnl_series: Vec<f64> = trades.iter().map(|t| t.pnl).collect();
        let consistency = guarded_ratio(mean_f64(&pnl_series), pop_std_dev(&pnl_series), pnl_series.len())
            .map(|v| v * 100.0);

        Self {
            expectancy_r,
            risk_reward_ratio,
            sharpe,
            sqn,
            consistency,
        }
    }
}

fn guarded_ratio(mean: f64, std: f64, n: usize) -> Option<f64> {
    if n < 2 || std < VARIANCE_FLOOR {
        return None;
    }
    Some(mean / std)
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor N, not N-1).
pub(crate) fn pop_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_f64(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use edgebook_core::domain::{AccountId, Direction, TradeId, TradeResult};

    fn make_trade(result: TradeResult, rr: f64, pnl: f64) -> TradeRecord {
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
            result,
            rr,
            pnl,
            account_size: 10_000.0,
            risk_percentage: Some(1.0),
            confidence: 5,
            mistakes: vec![],
            rules_followed: vec![],
        }
    }

    #[test]
    fn expectancy_known_values() {
        // 2 wins at 2R, 2 losses → win rate 0.5, avg win 2R
        // expectancy = 0.5*2 - 0.5*1 = 0.5
        let trades = vec![
            make_trade(TradeResult::Win, 2.0, 200.0),
            make_trade(TradeResult::Win, 2.0, 200.0),
            make_trade(TradeResult::Loss, 1.0, -100.0),
            make_trade(TradeResult::Loss, 1.0, -100.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        assert!((m.expectancy_r.unwrap() - 0.5).abs() < 1e-10);
        assert!((m.risk_reward_ratio.unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn expectancy_ignores_break_even_and_missed() {
        let trades = vec![
            make_trade(TradeResult::Win, 2.0, 200.0),
            make_trade(TradeResult::Loss, 1.0, -100.0),
            make_trade(TradeResult::BreakEven, 0.0, 0.0),
            make_trade(TradeResult::Missed, 3.0, 0.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        // win rate over decided = 0.5, avg win 2R → 0.5*2 - 0.5*1 = 0.5
        assert!((m.expectancy_r.unwrap() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn sharpe_known_values() {
        // R series [2, -1]: mean 0.5, population std 1.5 → 1/3
        let trades = vec![
            make_trade(TradeResult::Win, 2.0, 200.0),
            make_trade(TradeResult::Loss, 1.0, -100.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        assert!((m.sharpe.unwrap() - (0.5 / 1.5)).abs() < 1e-10);
    }

    #[test]
    fn sqn_known_values() {
        // Same series: expectancy 0.5, std 1.5, N = 2 → 0.5/1.5*sqrt(2)
        let trades = vec![
            make_trade(TradeResult::Win, 2.0, 200.0),
            make_trade(TradeResult::Loss, 1.0, -100.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        let expected = 0.5 / 1.5 * 2.0_f64.sqrt();
        assert!((m.sqn.unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn consistency_known_values() {
        // pnl [100, 300]: mean 200, population std 100 → 200
        let trades = vec![
            make_trade(TradeResult::Win, 1.0, 100.0),
            make_trade(TradeResult::Win, 3.0, 300.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        assert!((m.consistency.unwrap() - 200.0).abs() < 1e-10);
    }

    #[test]
    fn fewer_than_two_trades_is_not_available() {
        let one = vec![make_trade(TradeResult::Win, 2.0, 200.0)];
        let m = CompositeMetrics::compute(&one);
        assert_eq!(m.sharpe, None);
        assert_eq!(m.sqn, None);
        assert_eq!(m.consistency, None);
        // Expectancy only needs a decided trade
        assert!((m.expectancy_r.unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn zero_variance_is_not_available() {
        let trades = vec![
            make_trade(TradeResult::Win, 2.0, 100.0),
            make_trade(TradeResult::Win, 2.0, 100.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        assert_eq!(m.sharpe, None);
        assert_eq!(m.sqn, None);
        assert_eq!(m.consistency, None);
    }

    #[test]
    fn empty_is_all_none() {
        let m = CompositeMetrics::compute(&[]);
        assert_eq!(m, CompositeMetrics::default());
    }

    #[test]
    fn all_losses_expectancy_is_minus_one() {
        let trades = vec![
            make_trade(TradeResult::Loss, 1.0, -100.0),
            make_trade(TradeResult::Loss, 2.0, -100.0),
        ];
        let m = CompositeMetrics::compute(&trades);
        assert!((m.expectancy_r.unwrap() - (-1.0)).abs() < 1e-10);
        assert_eq!(m.risk_reward_ratio, Some(0.0));
    }

    #[test]
    fn population_std_dev_uses_divisor_n() {
        // [1, 3]: sample std would be sqrt(2); population std is 1
        assert!((pop_std_dev(&[1.0, 3.0]) - 1.0).abs() < 1e-10);
        assert_eq!(pop_std_dev(&[1.0]), 0.0);
        assert_eq!(pop_std_dev(&[]), 0.0);
    }
}
