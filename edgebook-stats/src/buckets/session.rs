//! Session performance — London, New York, Asian.

use super::BucketStat;
use edgebook_core::domain::{Session, TradeRecord};
use serde::{Deserialize, Serialize};

/// Per-session aggregates, always 3 buckets in `Session::ALL` order.
///
/// Trades without a session are excluded from this view entirely; there is
/// no "Unknown" bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPerformance {
    pub sessions: [BucketStat; 3],
    /// Trades excluded for a missing session tag.
    pub excluded: usize,
}

impl SessionPerformance {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut sessions = [BucketStat::default(); 3];
        let mut excluded = 0;
        for trade in trades {
            match trade.session {
                Some(session) => sessions[session.index()].add(trade),
                None => excluded += 1,
            }
        }
        Self { sessions, excluded }
    }

    pub fn stat(&self, session: Session) -> &BucketStat {
        &self.sessions[session.index()]
    }
}
