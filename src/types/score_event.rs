//! Score event types
//!
//! A score event is the unit producers submit for a run. Events are
//! append-only: once stored under a dedupe key they are never replaced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::SubmitError;
use crate::utils::{canonical_json, coerce_f64};

/// The only event kind the shot compiler interprets
pub const SHOT_KIND: &str = "shot";

/// A validated score event as held by the event store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub run_id: String,
    pub dedupe_key: String,
    pub ts: f64,
    pub kind: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl ScoreEvent {
    /// Whether this event describes a shot
    pub fn is_shot(&self) -> bool {
        self.kind == SHOT_KIND
    }

    /// Canonical serialization (sorted keys, minimal whitespace).
    ///
    /// Used as the tiebreaker when ordering events with equal timestamps.
    pub fn canonical_json(&self) -> String {
        canonical_json(&json!({
            "run_id": self.run_id,
            "dedupe_key": self.dedupe_key,
            "ts": self.ts,
            "kind": self.kind,
            "payload": self.payload,
        }))
    }
}

/// Submission body as sent by producers
///
/// Field validation happens in [`ScoreEventBody::into_event`], so a body can
/// be deserialized from loosely-typed JSON first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreEventBody {
    #[serde(rename = "dedupeKey", alias = "dedupe_key", default)]
    pub dedupe_key: String,
    #[serde(default)]
    pub ts: Value,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl ScoreEventBody {
    /// Create a body with a numeric timestamp
    pub fn new(dedupe_key: impl Into<String>, ts: f64, kind: impl Into<String>) -> Self {
        Self {
            dedupe_key: dedupe_key.into(),
            ts: json!(ts),
            kind: Some(kind.into()),
            payload: Map::new(),
        }
    }

    /// Attach a payload object. Non-object values are ignored.
    pub fn with_payload(mut self, payload: Value) -> Self {
        if let Value::Object(map) = payload {
            self.payload = map;
        }
        self
    }

    /// Validate the body and bind it to a run
    ///
    /// `run_id` is opaque and kept byte for byte, so reads with the same id
    /// find the event. Only an all-whitespace id is rejected.
    pub fn into_event(self, run_id: &str) -> Result<ScoreEvent, SubmitError> {
        if run_id.trim().is_empty() {
            return Err(SubmitError::EmptyRunId);
        }

        let dedupe_key = self.dedupe_key.trim();
        if dedupe_key.is_empty() {
            return Err(SubmitError::EmptyDedupeKey);
        }

        let ts = coerce_f64(&self.ts).ok_or_else(|| SubmitError::MalformedTimestamp(self.ts.to_string()))?;
        if ts < 0.0 {
            return Err(SubmitError::NegativeTimestamp(ts));
        }

        let kind = match self.kind.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => kind.to_string(),
            _ => return Err(SubmitError::MissingKind),
        };

        Ok(ScoreEvent {
            run_id: run_id.to_string(),
            dedupe_key: dedupe_key.to_string(),
            ts,
            kind,
            payload: self.payload,
        })
    }
}

/// A stored event together with store-side bookkeeping.
///
/// `seq` and `received_at` never take part in ordering or fingerprints.
#[derive(Debug, Clone, Serialize)]
pub struct StoredEvent {
    pub seq: u64,
    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
    pub event: ScoreEvent,
}

/// Outcome of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    Stored,
    Duplicate,
}

impl std::fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitStatus::Stored => write!(f, "stored"),
            SubmitStatus::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// Result of [`crate::event_store::ScoreEventStore::submit`]
///
/// `record` is always the first stored event for the dedupe key, so a
/// duplicate submission observes the original untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub status: SubmitStatus,
    pub dedupe_key: String,
    pub record: ScoreEvent,
}

impl SubmitOutcome {
    pub fn is_duplicate(&self) -> bool {
        self.status == SubmitStatus::Duplicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_deserializes_camel_case() {
        let body: ScoreEventBody = serde_json::from_value(json!({
            "dedupeKey": "k1",
            "ts": 12.5,
            "kind": "shot",
            "payload": {"hole": 1}
        }))
        .unwrap();

        let event = body.into_event("run-1").unwrap();
        assert_eq!(event.dedupe_key, "k1");
        assert_eq!(event.ts, 12.5);
        assert_eq!(event.kind, "shot");
        assert_eq!(event.payload.get("hole"), Some(&json!(1)));
        assert!(event.is_shot());
    }

    #[test]
    fn test_empty_dedupe_key_rejected() {
        let body = ScoreEventBody::new("   ", 1.0, "shot");
        assert!(matches!(body.into_event("r"), Err(SubmitError::EmptyDedupeKey)));
    }

    #[test]
    fn test_timestamp_validation() {
        let negative = ScoreEventBody::new("k", -1.0, "shot");
        assert!(matches!(negative.into_event("r"), Err(SubmitError::NegativeTimestamp(_))));

        let mut malformed = ScoreEventBody::new("k", 0.0, "shot");
        malformed.ts = json!("soon");
        assert!(matches!(malformed.into_event("r"), Err(SubmitError::MalformedTimestamp(_))));

        let mut missing = ScoreEventBody::new("k", 0.0, "shot");
        missing.ts = Value::Null;
        assert!(missing.into_event("r").is_err());

        let mut stringly = ScoreEventBody::new("k", 0.0, "shot");
        stringly.ts = json!("42");
        assert_eq!(stringly.into_event("r").unwrap().ts, 42.0);
    }

    #[test]
    fn test_missing_kind_rejected() {
        let mut body = ScoreEventBody::new("k", 1.0, "shot");
        body.kind = None;
        assert!(matches!(body.into_event("r"), Err(SubmitError::MissingKind)));
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        let event = ScoreEventBody::new("k", 3.0, "note")
            .with_payload(json!({"z": 1, "a": 2}))
            .into_event("r")
            .unwrap();

        assert_eq!(
            event.canonical_json(),
            r#"{"dedupe_key":"k","kind":"note","payload":{"a":2,"z":1},"run_id":"r","ts":3.0}"#
        );
    }

    #[test]
    fn test_run_id_kept_verbatim() {
        let event = ScoreEventBody::new("k", 1.0, "shot").into_event(" r1 ").unwrap();
        assert_eq!(event.run_id, " r1 ");

        let blank = ScoreEventBody::new("k", 1.0, "shot").into_event("   ");
        assert!(matches!(blank, Err(SubmitError::EmptyRunId)));
    }
}
