//! Score Event Store - append-only, deduplicated event log
//!
//! One exclusive lock serializes `submit` and `snapshot`, so a snapshot
//! never observes a partial write and concurrent submissions of the same
//! `(run_id, dedupe_key)` resolve to exactly one stored record.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::SubmitError;
use crate::types::{ScoreEvent, ScoreEventBody, StoredEvent, SubmitOutcome, SubmitStatus};

use super::snapshot::order_events;
use super::stats::EventStoreStats;

/// Events of a single run, keyed by dedupe key
#[derive(Debug, Default)]
struct RunLog {
    by_key: HashMap<String, StoredEvent>,
}

#[derive(Debug, Default)]
struct StoreState {
    runs: HashMap<String, RunLog>,
    next_seq: u64,
    duplicates: u64,
}

/// Process-local score event store
#[derive(Debug, Default)]
pub struct ScoreEventStore {
    state: Mutex<StoreState>,
}

impl ScoreEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a submission.
    ///
    /// A dedupe key already present for the run is a no-op that reports
    /// `Duplicate` and returns the first stored record unchanged.
    pub fn submit(&self, run_id: &str, body: ScoreEventBody) -> Result<SubmitOutcome, SubmitError> {
        let event = body.into_event(run_id)?;
        Ok(self.append(event))
    }

    /// Store an event already validated by `ScoreEventBody::into_event`
    pub(crate) fn append(&self, event: ScoreEvent) -> SubmitOutcome {
        let mut state = self.state.lock();
        let seq = state.next_seq;

        let run = state.runs.entry(event.run_id.clone()).or_default();
        let outcome = match run.by_key.entry(event.dedupe_key.clone()) {
            Entry::Occupied(existing) => SubmitOutcome {
                status: SubmitStatus::Duplicate,
                dedupe_key: event.dedupe_key,
                record: existing.get().event.clone(),
            },
            Entry::Vacant(slot) => {
                slot.insert(StoredEvent {
                    seq,
                    received_at: Utc::now(),
                    event: event.clone(),
                });
                SubmitOutcome {
                    status: SubmitStatus::Stored,
                    dedupe_key: event.dedupe_key.clone(),
                    record: event,
                }
            }
        };

        match outcome.status {
            SubmitStatus::Stored => state.next_seq += 1,
            SubmitStatus::Duplicate => state.duplicates += 1,
        }
        drop(state);

        debug!(
            run_id = %outcome.record.run_id,
            dedupe_key = %outcome.dedupe_key,
            status = %outcome.status,
            "score event submitted"
        );
        outcome
    }

    /// Events for a run ordered by `(ts, canonical_json(event))`.
    ///
    /// The returned list is a copy taken under the store lock.
    pub fn snapshot(&self, run_id: &str) -> Vec<ScoreEvent> {
        let events: Vec<ScoreEvent> = {
            let state = self.state.lock();
            match state.runs.get(run_id) {
                Some(run) => run.by_key.values().map(|s| s.event.clone()).collect(),
                None => Vec::new(),
            }
        };
        order_events(events)
    }

    /// Stored records for a run in submission order
    pub fn history(&self, run_id: &str) -> Vec<StoredEvent> {
        let mut records: Vec<StoredEvent> = {
            let state = self.state.lock();
            match state.runs.get(run_id) {
                Some(run) => run.by_key.values().cloned().collect(),
                None => Vec::new(),
            }
        };
        records.sort_by_key(|r| r.seq);
        records
    }

    /// Number of distinct events stored for a run
    pub fn event_count(&self, run_id: &str) -> usize {
        self.state
            .lock()
            .runs
            .get(run_id)
            .map_or(0, |run| run.by_key.len())
    }

    /// All run ids with at least one stored event, sorted
    pub fn run_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.lock().runs.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Counters collected under the store lock
    pub fn stats(&self) -> EventStoreStats {
        let state = self.state.lock();
        let mut stats = EventStoreStats {
            runs: state.runs.len(),
            duplicates_absorbed: state.duplicates,
            ..Default::default()
        };
        for run in state.runs.values() {
            stats.stored_events += run.by_key.len();
            for record in run.by_key.values() {
                *stats.events_by_kind.entry(record.event.kind.clone()).or_insert(0) += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shot_body(key: &str, ts: f64, hole: i64, shot: i64) -> ScoreEventBody {
        ScoreEventBody::new(key, ts, "shot").with_payload(json!({
            "hole": hole,
            "shot": shot,
            "distance_before_m": 100.0,
            "distance_after_m": 10.0,
            "lie_before": "fairway",
        }))
    }

    #[test]
    fn test_submit_and_snapshot() {
        let store = ScoreEventStore::new();
        let outcome = store.submit("r1", shot_body("a", 2.0, 1, 2)).unwrap();
        assert_eq!(outcome.status, SubmitStatus::Stored);
        assert_eq!(outcome.dedupe_key, "a");

        store.submit("r1", shot_body("b", 1.0, 1, 1)).unwrap();

        let snapshot = store.snapshot("r1");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].dedupe_key, "b");
        assert_eq!(snapshot[1].dedupe_key, "a");
        assert!(store.snapshot("other").is_empty());
    }

    #[test]
    fn test_duplicate_preserves_first_record() {
        let store = ScoreEventStore::new();
        store.submit("r1", shot_body("a", 1.0, 1, 1)).unwrap();

        let second = store.submit("r1", shot_body("a", 5.0, 9, 9)).unwrap();
        assert!(second.is_duplicate());
        assert_eq!(second.record.ts, 1.0);
        assert_eq!(second.record.payload["hole"], json!(1));
        assert_eq!(store.event_count("r1"), 1);
        assert_eq!(store.stats().duplicates_absorbed, 1);
    }

    #[test]
    fn test_dedupe_is_scoped_per_run() {
        let store = ScoreEventStore::new();
        store.submit("r1", shot_body("a", 1.0, 1, 1)).unwrap();
        let other = store.submit("r2", shot_body("a", 1.0, 1, 1)).unwrap();
        assert_eq!(other.status, SubmitStatus::Stored);
        assert_eq!(store.run_ids(), vec!["r1".to_string(), "r2".to_string()]);
    }

    #[test]
    fn test_client_errors_leave_store_untouched() {
        let store = ScoreEventStore::new();
        assert_eq!(
            store.submit("r1", ScoreEventBody::new("", 1.0, "shot")),
            Err(SubmitError::EmptyDedupeKey)
        );
        assert!(matches!(
            store.submit("r1", ScoreEventBody::new("k", -1.0, "shot")),
            Err(SubmitError::NegativeTimestamp(_))
        ));
        assert_eq!(store.stats().stored_events, 0);
        assert!(store.run_ids().is_empty());
    }

    #[test]
    fn test_unknown_kind_stored_verbatim() {
        let store = ScoreEventStore::new();
        store
            .submit("r1", ScoreEventBody::new("n1", 1.0, "comment").with_payload(json!({"text": "nice"})))
            .unwrap();
        let snapshot = store.snapshot("r1");
        assert_eq!(snapshot[0].kind, "comment");
        assert_eq!(store.stats().events_by_kind.get("comment"), Some(&1));
    }

    #[test]
    fn test_history_in_submission_order() {
        let store = ScoreEventStore::new();
        store.submit("r1", shot_body("late", 9.0, 1, 2)).unwrap();
        store.submit("r1", shot_body("early", 1.0, 1, 1)).unwrap();
        let keys: Vec<String> = store
            .history("r1")
            .into_iter()
            .map(|r| r.event.dedupe_key)
            .collect();
        assert_eq!(keys, vec!["late", "early"]);
    }
}
