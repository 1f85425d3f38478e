//! Snapshot fingerprinting — deterministic identity for a trade-list snapshot.
//!
//! The engine holds no state and recomputes reports from scratch on every
//! call. The fingerprint gives callers a stable key for memoizing reports
//! per snapshot; the caching policy itself lives with the caller.

use crate::domain::TradeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BLAKE3 hash of the canonical JSON of a trade list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotHash(pub String);

impl SnapshotHash {
    pub fn from_hash(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl fmt::Display for SnapshotHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash a snapshot. Equal lists (same records, same order) hash equal; any
/// field or ordering change changes the hash.
pub fn snapshot_hash(trades: &[TradeRecord]) -> SnapshotHash {
    let json = serde_json::to_string(trades).expect("TradeRecord must serialize");
    SnapshotHash(blake3::hash(json.as_bytes()).to_hex().to_string())
}
