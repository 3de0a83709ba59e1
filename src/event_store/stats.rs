//! Event Store statistics

use std::collections::BTreeMap;

use serde::Serialize;

/// Point-in-time counters for the score event store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventStoreStats {
    /// Runs with at least one stored event
    pub runs: usize,
    /// Distinct stored events across all runs
    pub stored_events: usize,
    /// Submissions absorbed as duplicates
    pub duplicates_absorbed: u64,
    /// Stored events by kind
    pub events_by_kind: BTreeMap<String, usize>,
}

impl EventStoreStats {
    /// Stored plus absorbed submissions
    pub fn total_submissions(&self) -> u64 {
        self.stored_events as u64 + self.duplicates_absorbed
    }
}
