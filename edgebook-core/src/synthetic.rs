//! Deterministic synthetic journals for fixtures and benches.
//!
//! The same seed always yields the same journal. A slice of the generated
//! records carries missing or garbled optional fields so the exclusion paths
//! of time- and risk-dependent views get exercised, and a slice carries a
//! manually overridden `pnl` so the dollar and R ledgers diverge the way
//! they do in real journals.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    derive_pnl, derive_rr, AccountId, Direction, Session, TradeId, TradeRecord, TradeResult,
};

const ASSETS: [&str; 5] = ["EURUSD", "GBPUSD", "NAS100", "XAUUSD", "BTCUSD"];
const STRATEGIES: [&str; 3] = ["breakout", "pullback", "reversal"];
const MISTAKES: [&str; 4] = ["moved stop", "early entry", "oversized", "chased"];
const RULES: [&str; 3] = ["waited for confirmation", "risk under 2%", "session filter"];

/// Generate `n` plausible journal records, at most a few per calendar day.
pub fn synthetic_journal(n: usize, seed: u64) -> Vec<TradeRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid base date");

    (0..n)
        .map(|i| {
            let date = base_date + Duration::days((i / 3) as i64);
            let result = match rng.gen_range(0..100) {
                0..=44 => TradeResult::Win,
                45..=79 => TradeResult::Loss,
                80..=89 => TradeResult::BreakEven,
                _ => TradeResult::Missed,
            };

            let direction = if rng.gen_bool(0.5) { Direction::Buy } else { Direction::Sell };
            let entry_price = rng.gen_range(50.0..200.0_f64);
            let risk = entry_price * rng.gen_range(0.005..0.03);
            let stop_loss = match direction {
                Direction::Buy => entry_price - risk,
                Direction::Sell => entry_price + risk,
            };
            let target_rr = match result {
                TradeResult::Win => rng.gen_range(0.5..4.0),
                TradeResult::Loss => 1.0,
                TradeResult::BreakEven | TradeResult::Missed => rng.gen_range(1.0..3.0),
            };
            let exit_price = match (direction, result) {
                (Direction::Buy, TradeResult::Win) => entry_price + risk * target_rr,
                (Direction::Buy, _) => entry_price - risk,
                (Direction::Sell, TradeResult::Win) => entry_price - risk * target_rr,
                (Direction::Sell, _) => entry_price + risk,
            };
            let rr = derive_rr(entry_price, stop_loss, exit_price);

            let account_size = 10_000.0 + rng.gen_range(0.0..40_000.0);
            let risk_percentage = if rng.gen_bool(0.9) {
                Some(rng.gen_range(0.25..3.0))
            } else {
                None
            };
            let mut pnl = derive_pnl(
                account_size,
                risk_percentage.unwrap_or(1.0),
                rr,
                result,
            );
            // Manual override on a slice of records: the two ledgers diverge
            if rng.gen_bool(0.15) {
                pnl *= rng.gen_range(0.6..1.4);
            }

            let entry_minutes = rng.gen_range(0..24 * 60);
            let entry_time = match rng.gen_range(0..20) {
                0..=16 => Some(format!("{:02}:{:02}", entry_minutes / 60, entry_minutes % 60)),
                17 => Some("n/a".to_string()),
                _ => None,
            };
            let exit_minutes = (entry_minutes + rng.gen_range(1..600)) % (24 * 60);
            let exit_time = if rng.gen_bool(0.85) {
                Some(format!("{:02}:{:02}", exit_minutes / 60, exit_minutes % 60))
            } else {
                None
            };

            let session = if rng.gen_bool(0.85) {
                Some(Session::ALL[rng.gen_range(0..Session::ALL.len())])
            } else {
                None
            };

            let mistakes = if result == TradeResult::Loss && rng.gen_bool(0.5) {
                vec![MISTAKES[rng.gen_range(0..MISTAKES.len())].to_string()]
            } else {
                vec![]
            };
            let rules_followed = if rng.gen_bool(0.6) {
                vec![RULES[rng.gen_range(0..RULES.len())].to_string()]
            } else {
                vec![]
            };

            TradeRecord {
                id: TradeId::new(format!("syn-{i}")),
                account_id: AccountId::new("syn-account"),
                date,
                entry_time,
                exit_time,
                session,
                asset: ASSETS[rng.gen_range(0..ASSETS.len())].to_string(),
                strategy: STRATEGIES[rng.gen_range(0..STRATEGIES.len())].to_string(),
                direction,
                entry_price,
                stop_loss,
                exit_price,
                result,
                rr,
                pnl,
                account_size,
                risk_percentage,
                confidence: rng.gen_range(1..=10),
                mistakes,
                rules_followed,
            }
        })
        .collect()
}
