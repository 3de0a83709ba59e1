//! Read path: `get_run_sg`
//!
//! ```text
//! snapshot ─► compile ─► cache.get ──hit──► return
//!                            │
//!                           miss ─► record_miss ─► compute ─► cache.put ─► return
//! ```
//!
//! Computation runs outside every lock. Two concurrent misses for the same
//! fingerprint may both compute; the later `put` overwrites with an equal value.

use std::sync::Arc;

use tracing::debug;

use crate::compiler::{compile, Fingerprint};
use crate::engine::StrokesGainedEngine;
use crate::error::SgError;
use crate::types::RunSg;

use super::RunSgService;

/// `get_run_sg` result with cache diagnostics
#[derive(Debug, Clone)]
pub struct RunSgLookup {
    pub run_sg: Arc<RunSg>,
    pub fingerprint: Fingerprint,
    pub cache_hit: bool,
}

pub fn lookup(service: &RunSgService, run_id: &str) -> Result<RunSgLookup, SgError> {
    let snapshot = service.store.snapshot(run_id);
    let compiled = compile(&snapshot);

    if let Some(run_sg) = service.cache.get(run_id, &compiled.fingerprint) {
        return Ok(RunSgLookup {
            run_sg,
            fingerprint: compiled.fingerprint,
            cache_hit: true,
        });
    }
    service.cache.record_miss();
    debug!(run_id = %run_id, fingerprint = %compiled.fingerprint, shots = compiled.len(), "cache miss");

    let run_sg = if compiled.is_empty() {
        RunSg::empty(run_id)
    } else {
        StrokesGainedEngine::new(&service.curves).compute(run_id, &compiled.shots)?
    };
    let run_sg = Arc::new(run_sg);

    service
        .cache
        .put(run_id, Arc::clone(&run_sg), compiled.fingerprint.clone());

    Ok(RunSgLookup {
        run_sg,
        fingerprint: compiled.fingerprint,
        cache_hit: false,
    })
}

pub fn get_run_sg(service: &RunSgService, run_id: &str) -> Result<Arc<RunSg>, SgError> {
    lookup(service, run_id).map(|l| l.run_sg)
}

/// Current shots fingerprint for a run, without touching the cache
pub fn fingerprint(service: &RunSgService, run_id: &str) -> Fingerprint {
    compile(&service.store.snapshot(run_id)).fingerprint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreEventBody;
    use serde_json::json;

    fn submit_shot(service: &RunSgService, run_id: &str, key: &str, hole: i64, shot: i64, before: f64, after: f64) {
        let body = ScoreEventBody::new(key, shot as f64, "shot").with_payload(json!({
            "hole": hole,
            "shot": shot,
            "distance_before_m": before,
            "distance_after_m": after,
            "lie_before": "fairway",
        }));
        service.submit_score_event(run_id, body).unwrap();
    }

    #[test]
    fn test_miss_then_hit() {
        let service = RunSgService::new();
        submit_shot(&service, "r", "a", 1, 1, 120.0, 0.0);

        let first = service.lookup("r").unwrap();
        let second = service.lookup("r").unwrap();
        assert!(!first.cache_hit);
        assert!(second.cache_hit);
        assert!(Arc::ptr_eq(&first.run_sg, &second.run_sg));
        assert_eq!(service.cache.counters(), (1, 1));
    }

    #[test]
    fn test_data_error_is_not_cached() {
        let service = RunSgService::new();
        submit_shot(&service, "r", "a", 1, 1, -5.0, 0.0);

        assert!(service.get_run_sg("r").is_err());
        assert!(service.get_run_sg("r").is_err());
        assert!(service.cache.is_empty());
        assert_eq!(service.cache.counters(), (0, 2));
    }

    #[test]
    fn test_fingerprint_tracks_events() {
        let service = RunSgService::new();
        let empty = service.fingerprint("r");
        submit_shot(&service, "r", "a", 1, 1, 120.0, 0.0);
        assert_ne!(service.fingerprint("r"), empty);
    }
}
