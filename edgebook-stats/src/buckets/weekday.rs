//! Day-of-week performance.

use super::BucketStat;
use chrono::{Datelike, Weekday};
use edgebook_core::domain::TradeRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sunday-first display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Per-weekday aggregates, always 7 buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPerformance {
    /// Indexed Sunday..Saturday.
    pub days: [BucketStat; 7],
}

impl WeekdayPerformance {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut days = [BucketStat::default(); 7];
        for trade in trades {
            days[trade.date.weekday().num_days_from_sunday() as usize].add(trade);
        }
        Self { days }
    }

    pub fn stat(&self, day: Weekday) -> &BucketStat {
        &self.days[day.num_days_from_sunday() as usize]
    }

    /// Day with the highest summed pnl, only if strictly positive. A day
    /// that merely breaks even is not "most profitable".
    pub fn most_profitable(&self) -> Option<Weekday> {
        let (i, stat) = self
            .days
            .iter()
            .enumerate()
            .max_by(|a, b| cmp_pnl(a.1, b.1))?;
        (stat.total_pnl > 0.0).then(|| WEEK[i])
    }

    /// Day with the lowest summed pnl, only if strictly negative.
    pub fn least_profitable(&self) -> Option<Weekday> {
        let (i, stat) = self
            .days
            .iter()
            .enumerate()
            .min_by(|a, b| cmp_pnl(a.1, b.1))?;
        (stat.total_pnl < 0.0).then(|| WEEK[i])
    }
}

fn cmp_pnl(a: &BucketStat, b: &BucketStat) -> Ordering {
    a.total_pnl.partial_cmp(&b.total_pnl).unwrap_or(Ordering::Equal)
}
