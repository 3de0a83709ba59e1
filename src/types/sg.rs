//! Strokes-gained result types
//!
//! These serialize to the read contract:
//! `{run_id, sg_total, holes: [{hole, sg_total, shots}], shots}`.

use serde::{Deserialize, Serialize};

/// Strokes gained on a single shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotSg {
    pub hole: u32,
    pub shot: u32,
    pub sg_delta: f64,
}

/// Strokes gained on one hole, shots in ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSg {
    pub hole: u32,
    pub sg_total: f64,
    pub shots: Vec<ShotSg>,
}

/// Strokes gained for a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSg {
    pub run_id: String,
    pub sg_total: f64,
    pub holes: Vec<HoleSg>,
    pub shots: Vec<ShotSg>,
}

impl RunSg {
    /// Result for a run with no shots
    pub fn empty(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            sg_total: 0.0,
            holes: Vec::new(),
            shots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Look up a hole by number
    pub fn hole(&self, hole: u32) -> Option<&HoleSg> {
        self.holes.iter().find(|h| h.hole == hole)
    }
}
