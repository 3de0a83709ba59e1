//! Shots fingerprint
//!
//! The fingerprint is the cache validity token for a run. It is computed over
//! the sorted list of canonical shot tuples:
//!
//! ```text
//! (hole, shot, distance_before_m, distance_after_m,
//!  lie_before.lower(), (lie_after or "").lower(), canonical_json(penalty))
//! ```
//!
//! Sorting makes it independent of submission order; only the listed payload
//! fields take part, so unrelated payload keys never change it.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::utils::canonical_json;

/// Hex characters kept from the digest (160 bits)
const FINGERPRINT_HEX_LEN: usize = 40;

/// Order-invariant digest of a run's shot set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical tuple for one shot
#[derive(Debug, Clone)]
pub struct ShotKey {
    pub hole: i64,
    pub shot: i64,
    pub distance_before_m: f64,
    pub distance_after_m: f64,
    pub lie_before: String,
    pub lie_after: String,
    pub penalty: String,
}

impl ShotKey {
    pub fn new(
        hole: i64,
        shot: i64,
        distance_before_m: f64,
        distance_after_m: f64,
        lie_before: &str,
        lie_after: Option<&str>,
        penalty: &Value,
    ) -> Self {
        Self {
            hole,
            shot,
            // + 0.0 folds -0.0 into 0.0
            distance_before_m: distance_before_m + 0.0,
            distance_after_m: distance_after_m + 0.0,
            lie_before: lie_before.to_lowercase(),
            lie_after: lie_after.unwrap_or_default().to_lowercase(),
            penalty: canonical_json(penalty),
        }
    }

    fn to_json(&self) -> Value {
        json!([
            self.hole,
            self.shot,
            self.distance_before_m,
            self.distance_after_m,
            self.lie_before,
            self.lie_after,
            self.penalty,
        ])
    }
}

impl PartialEq for ShotKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ShotKey {}

impl PartialOrd for ShotKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShotKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hole
            .cmp(&other.hole)
            .then(self.shot.cmp(&other.shot))
            .then(self.distance_before_m.total_cmp(&other.distance_before_m))
            .then(self.distance_after_m.total_cmp(&other.distance_after_m))
            .then_with(|| self.lie_before.cmp(&other.lie_before))
            .then_with(|| self.lie_after.cmp(&other.lie_after))
            .then_with(|| self.penalty.cmp(&other.penalty))
    }
}

/// Fingerprint a set of shot keys. Input order does not matter.
pub fn fingerprint(keys: &[ShotKey]) -> Fingerprint {
    let mut sorted: Vec<&ShotKey> = keys.iter().collect();
    sorted.sort();

    let canonical = canonical_json(&Value::Array(sorted.iter().map(|k| k.to_json()).collect()));

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(FINGERPRINT_HEX_LEN);
    Fingerprint(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(hole: i64, shot: i64, before: f64, after: f64, lie: &str) -> ShotKey {
        ShotKey::new(hole, shot, before, after, lie, None, &Value::Null)
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint(&[key(1, 1, 150.0, 12.0, "tee")]);
        assert_eq!(fp.as_str().len(), 40);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_order_invariant() {
        let a = key(1, 1, 150.0, 12.0, "tee");
        let b = key(1, 2, 12.0, 0.0, "green");
        let c = key(2, 1, 320.0, 140.0, "tee");

        let forward = fingerprint(&[a.clone(), b.clone(), c.clone()]);
        let reverse = fingerprint(&[c, b, a]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_fingerprint_sensitive_to_content() {
        let base = fingerprint(&[key(1, 1, 150.0, 12.0, "tee")]);
        assert_ne!(base, fingerprint(&[key(1, 1, 150.0, 12.5, "tee")]));
        assert_ne!(base, fingerprint(&[key(1, 1, 150.0, 12.0, "fairway")]));

        let with_penalty = ShotKey::new(1, 1, 150.0, 12.0, "tee", None, &Value::String("ob".into()));
        assert_ne!(base, fingerprint(&[with_penalty]));
    }

    #[test]
    fn test_lie_case_is_normalized() {
        let upper = ShotKey::new(1, 1, 150.0, 12.0, "TEE", Some("Green"), &Value::Null);
        let lower = ShotKey::new(1, 1, 150.0, 12.0, "tee", Some("green"), &Value::Null);
        assert_eq!(fingerprint(&[upper]), fingerprint(&[lower]));
    }

    #[test]
    fn test_empty_fingerprint_is_stable() {
        assert_eq!(fingerprint(&[]), fingerprint(&[]));
    }
}
