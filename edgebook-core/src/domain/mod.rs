//! Domain types for edgebook.

pub mod clock;
pub mod ids;
pub mod trade;

pub use clock::{trade_duration_minutes, ClockTime, MINUTES_PER_DAY};
pub use ids::{AccountId, TradeId};
pub use trade::{
    derive_pnl, derive_rr, Direction, Session, TradeError, TradeRecord, TradeResult,
};
