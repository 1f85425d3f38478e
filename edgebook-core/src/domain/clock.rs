//! Clock times — "HH:MM" entry/exit stamps and trade durations.
//!
//! Journal times arrive as free-text strings. Parsing is lenient by
//! contract: a malformed stamp yields `None`, which excludes the trade from
//! time-dependent views without failing the batch.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A local wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    /// Minutes from midnight, always `< MINUTES_PER_DAY`.
    minutes: u32,
}

impl ClockTime {
    /// Parse an "HH:MM" stamp. Returns `None` for anything malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.trim().split_once(':')?;
        let h: u32 = h.parse().ok()?;
        let m: u32 = m.parse().ok()?;
        if h > 23 || m > 59 {
            return None;
        }
        Some(Self { minutes: h * 60 + m })
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    pub fn minutes_from_midnight(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Minutes between entry and exit on the same calendar day.
///
/// An exit earlier than the entry signals an overnight hold: the exit is
/// treated as next-day and the duration wraps forward by 24h. The result is
/// always in `[0, MINUTES_PER_DAY)`.
pub fn trade_duration_minutes(entry: ClockTime, exit: ClockTime) -> u32 {
    (exit.minutes + MINUTES_PER_DAY - entry.minutes) % MINUTES_PER_DAY
}
