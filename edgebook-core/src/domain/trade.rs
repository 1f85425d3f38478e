//! TradeRecord — one logged trade, the unit of analysis.

use super::clock::{trade_duration_minutes, ClockTime};
use super::ids::{AccountId, TradeId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
}

/// Outcome classification.
///
/// Exactly one `result` value governs both the R ledger and the win/loss
/// partition: a trade is never a win in one metric and a loss in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeResult {
    Win,
    Loss,
    BreakEven,
    Missed,
}

/// Trading session the entry fell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    London,
    NewYork,
    Asian,
}

impl Session {
    pub const ALL: [Session; 3] = [Session::London, Session::NewYork, Session::Asian];

    /// Stable index into session-keyed tables (`Session::ALL` order).
    pub fn index(&self) -> usize {
        match self {
            Session::London => 0,
            Session::NewYork => 1,
            Session::Asian => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Session::London => "London",
            Session::NewYork => "New York",
            Session::Asian => "Asian",
        }
    }
}

/// Validation failures for a trade record.
///
/// Offered to the persistence boundary at write time; the reducers assume
/// valid input and never call this.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("risk-reward multiple must be non-negative, got {0}")]
    NegativeRr(f64),
    #[error("confidence must be in 1..=10, got {0}")]
    ConfidenceOutOfRange(u8),
    #[error("account size must be positive, got {0}")]
    NonPositiveAccountSize(f64),
}

/// One logged trade.
///
/// Dollars (`pnl`) and R-multiples are two parallel ledgers that are not
/// forced to agree: `pnl` may be manually overridden (fees, partial fills)
/// while the R ledger is always derived from `result` and `rr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    // ── Identification ──
    pub id: TradeId,
    pub account_id: AccountId,

    // ── When ──
    pub date: NaiveDate,
    /// Raw "HH:MM" stamps as logged. Parsed lazily so a malformed stamp
    /// only excludes the trade from time-dependent views.
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub session: Option<Session>,

    // ── What ──
    pub asset: String,
    pub strategy: String,
    pub direction: Direction,

    // ── Prices ──
    pub entry_price: f64,
    pub stop_loss: f64,
    pub exit_price: f64,

    // ── Outcome ──
    pub result: TradeResult,
    /// Non-negative risk-reward multiple; the sign of the R contribution
    /// comes from `result`, never from `rr`.
    pub rr: f64,
    /// Signed dollar outcome, independent of the R ledger.
    pub pnl: f64,

    // ── Sizing ──
    pub account_size: f64,
    pub risk_percentage: Option<f64>,

    // ── Self-review ──
    pub confidence: u8,
    pub mistakes: Vec<String>,
    pub rules_followed: Vec<String>,
}

impl TradeRecord {
    /// The trade's contribution to the R ledger.
    ///
    /// Wins contribute `+rr`; losses contribute exactly `-1` regardless of
    /// `rr`; break-even and missed trades contribute nothing.
    pub fn r_multiple(&self) -> f64 {
        match self.result {
            TradeResult::Win => self.rr,
            TradeResult::Loss => -1.0,
            TradeResult::BreakEven | TradeResult::Missed => 0.0,
        }
    }

    /// True for trades that settle the win/loss question.
    pub fn is_decided(&self) -> bool {
        matches!(self.result, TradeResult::Win | TradeResult::Loss)
    }

    pub fn is_win(&self) -> bool {
        self.result == TradeResult::Win
    }

    pub fn is_loss(&self) -> bool {
        self.result == TradeResult::Loss
    }

    /// Parsed entry stamp; `None` when missing or malformed.
    pub fn entry_clock(&self) -> Option<ClockTime> {
        self.entry_time.as_deref().and_then(ClockTime::parse)
    }

    /// Parsed exit stamp; `None` when missing or malformed.
    pub fn exit_clock(&self) -> Option<ClockTime> {
        self.exit_time.as_deref().and_then(ClockTime::parse)
    }

    /// Holding time in minutes with overnight correction; `None` unless
    /// both stamps parse.
    pub fn duration_minutes(&self) -> Option<u32> {
        Some(trade_duration_minutes(self.entry_clock()?, self.exit_clock()?))
    }

    /// Check the invariants the persistence layer is expected to uphold.
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.rr < 0.0 {
            return Err(TradeError::NegativeRr(self.rr));
        }
        if !(1..=10).contains(&self.confidence) {
            return Err(TradeError::ConfidenceOutOfRange(self.confidence));
        }
        if self.account_size <= 0.0 {
            return Err(TradeError::NonPositiveAccountSize(self.account_size));
        }
        Ok(())
    }
}

/// Risk-reward multiple from the price triple:
/// `|exit - entry| / |entry - stop|`.
///
/// Forced to 0 when the stop sits exactly on the entry (zero initial risk).
pub fn derive_rr(entry_price: f64, stop_loss: f64, exit_price: f64) -> f64 {
    if entry_price == stop_loss {
        return 0.0;
    }
    ((exit_price - entry_price) / (entry_price - stop_loss)).abs()
}

/// Dollar outcome from account sizing, for records logged without an
/// explicit `pnl`.
pub fn derive_pnl(account_size: f64, risk_percentage: f64, rr: f64, result: TradeResult) -> f64 {
    let risked = account_size * risk_percentage / 100.0;
    match result {
        TradeResult::Win => risked * rr,
        TradeResult::Loss => -risked,
        TradeResult::BreakEven | TradeResult::Missed => 0.0,
    }
}
