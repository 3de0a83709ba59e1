//! Shot Compiler
//!
//! Turns an event snapshot into validated [`ShotEvent`]s plus the shots
//! fingerprint. Events that are not shots, or whose payload lacks a required
//! field or fails numeric coercion, are skipped without error. Ordering is
//! taken from the snapshot as-is.

mod fingerprint;

use serde_json::{Map, Value};
use tracing::trace;

use crate::types::{Lie, Penalty, ScoreEvent, ShotEvent};
use crate::utils::{coerce_f64, coerce_i64};

pub use fingerprint::{fingerprint, Fingerprint, ShotKey};

/// Compiled shots for one run together with their fingerprint
#[derive(Debug, Clone)]
pub struct CompiledRun {
    pub shots: Vec<ShotEvent>,
    pub fingerprint: Fingerprint,
}

impl CompiledRun {
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }
}

/// Compile a snapshot of events
pub fn compile(events: &[ScoreEvent]) -> CompiledRun {
    let mut shots = Vec::new();
    let mut keys = Vec::new();

    for event in events.iter().filter(|e| e.is_shot()) {
        match parse_shot(event.ts, &event.payload) {
            Some((shot, key)) => {
                shots.push(shot);
                keys.push(key);
            }
            None => trace!(
                run_id = %event.run_id,
                dedupe_key = %event.dedupe_key,
                "skipping shot event with incomplete payload"
            ),
        }
    }

    CompiledRun {
        shots,
        fingerprint: fingerprint(&keys),
    }
}

fn parse_shot(ts: f64, payload: &Map<String, Value>) -> Option<(ShotEvent, ShotKey)> {
    let hole = coerce_i64(payload.get("hole")?)?;
    let shot = coerce_i64(payload.get("shot")?)?;
    let before_m = coerce_f64(payload.get("distance_before_m")?)?;
    let after_m = coerce_f64(payload.get("distance_after_m")?)?;
    let lie_before = payload.get("lie_before")?.as_str()?;
    let lie_after = payload.get("lie_after").and_then(Value::as_str);
    let penalty = payload.get("penalty").unwrap_or(&Value::Null);

    let key = ShotKey::new(hole, shot, before_m, after_m, lie_before, lie_after, penalty);
    let event = ShotEvent {
        hole,
        shot,
        ts,
        before_m,
        after_m,
        before_lie: Lie::from_label(lie_before),
        penalty: Penalty::from_value(penalty),
    };
    Some((event, key))
}
