//! Edgebook Core — trading-journal domain types.
//!
//! This crate contains the data model the analytics engine consumes:
//! - Trade records with the dual R/$ ledger convention
//! - Typed ids
//! - Clock-time parsing ("HH:MM") with overnight correction
//! - Snapshot fingerprinting for caller-side memoization
//! - Deterministic synthetic journals for fixtures and benches
//!
//! Records are immutable once handed to a computation pass: every consumer
//! receives a read-only snapshot, already filtered by date range and account
//! by the persistence layer.

pub mod domain;
pub mod fingerprint;
pub mod synthetic;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core domain types are Send + Sync.
    ///
    /// Dashboard hosts recompute reports from worker threads; if any type
    /// fails this check, the build breaks immediately.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::TradeRecord>();
        require_sync::<domain::TradeRecord>();
        require_send::<domain::Direction>();
        require_sync::<domain::Direction>();
        require_send::<domain::TradeResult>();
        require_sync::<domain::TradeResult>();
        require_send::<domain::Session>();
        require_sync::<domain::Session>();
        require_send::<domain::ClockTime>();
        require_sync::<domain::ClockTime>();
        require_send::<domain::TradeId>();
        require_sync::<domain::TradeId>();
        require_send::<domain::AccountId>();
        require_sync::<domain::AccountId>();
        require_send::<fingerprint::SnapshotHash>();
        require_sync::<fingerprint::SnapshotHash>();
    }
}
