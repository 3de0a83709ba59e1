//! Snapshot ordering
//!
//! Events sort by timestamp, then by their canonical JSON. The tiebreaker
//! keeps the order stable when equal timestamps arrive concurrently.

use crate::types::ScoreEvent;

/// Sort events by `(ts, canonical_json(event))`
pub fn order_events(events: Vec<ScoreEvent>) -> Vec<ScoreEvent> {
    let mut keyed: Vec<(String, ScoreEvent)> = events
        .into_iter()
        .map(|e| (e.canonical_json(), e))
        .collect();
    keyed.sort_by(|(ca, a), (cb, b)| a.ts.total_cmp(&b.ts).then_with(|| ca.cmp(cb)));
    keyed.into_iter().map(|(_, e)| e).collect()
}
