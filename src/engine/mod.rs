//! Strokes-Gained Engine
//!
//! Pure computation from compiled shots to per-shot, per-hole and per-run
//! strokes gained. No I/O and no shared state.
//!
//! Per shot:
//!
//! ```text
//! sg_delta = E(before_m, before_lie) - 1 - E(after_m, after_lie) - penalty_cost
//! ```
//!
//! where `after_lie` comes from [`after_lie`].

mod aggregate;

use tracing::{debug, warn};

use crate::curves::ExpectedStrokes;
use crate::error::SgError;
use crate::types::{Lie, RunSg, ShotEvent, ShotSg};
use crate::utils::round4;

pub use aggregate::aggregate;

/// Shots finishing within this distance are treated as on the green
pub const GREEN_TRANSITION_M: f64 = 25.0;

/// Lie a shot finishes on, or `None` when holed.
///
/// This is the only place deciding the green transition.
pub fn after_lie(after_m: f64, before_lie: Lie) -> Option<Lie> {
    if after_m <= 0.0 {
        None
    } else if after_m <= GREEN_TRANSITION_M {
        Some(Lie::Green)
    } else {
        Some(before_lie)
    }
}

/// Strokes-gained calculator bound to an expected-strokes table
#[derive(Debug, Clone, Copy)]
pub struct StrokesGainedEngine<'a> {
    curves: &'a ExpectedStrokes,
}

impl<'a> StrokesGainedEngine<'a> {
    pub fn new(curves: &'a ExpectedStrokes) -> Self {
        Self { curves }
    }

    /// Unrounded strokes gained for one shot
    pub fn raw_delta(&self, shot: &ShotEvent) -> Result<f64, SgError> {
        validate(shot)?;

        let e_before = self.curves.expected(shot.before_m, shot.before_lie);
        let e_after = match after_lie(shot.after_m, shot.before_lie) {
            None => 0.0,
            Some(lie) => self.curves.expected(shot.after_m, lie),
        };

        Ok(e_before - 1.0 - e_after - shot.penalty.cost())
    }

    /// Strokes gained for one shot, rounded to 4 decimals
    pub fn shot_sg(&self, shot: &ShotEvent) -> Result<ShotSg, SgError> {
        let delta = self.raw_delta(shot)?;
        Ok(ShotSg {
            // Positive and in range after validation
            hole: shot.hole as u32,
            shot: shot.shot as u32,
            sg_delta: round4(delta),
        })
    }

    /// Compute the full result for a run.
    ///
    /// Any invalid shot fails the whole run; nothing partial is returned.
    pub fn compute(&self, run_id: &str, shots: &[ShotEvent]) -> Result<RunSg, SgError> {
        let mut scored = Vec::with_capacity(shots.len());
        for shot in shots {
            match self.shot_sg(shot) {
                Ok(sg) => scored.push(sg),
                Err(e) => {
                    warn!(run_id = %run_id, error = %e, "rejecting run with invalid shot");
                    return Err(e);
                }
            }
        }

        let run = aggregate(run_id, scored);
        debug!(
            run_id = %run_id,
            holes = run.holes.len(),
            shots = run.shots.len(),
            sg_total = run.sg_total,
            "computed strokes gained"
        );
        Ok(run)
    }
}

impl StrokesGainedEngine<'static> {
    /// Engine over the built-in baseline
    pub fn baseline() -> Self {
        Self::new(ExpectedStrokes::baseline())
    }
}

fn validate(shot: &ShotEvent) -> Result<(), SgError> {
    if shot.hole <= 0 || shot.hole > i64::from(u32::MAX) {
        return Err(SgError::InvalidHole { hole: shot.hole });
    }
    if shot.shot <= 0 || shot.shot > i64::from(u32::MAX) {
        return Err(SgError::InvalidShot {
            hole: shot.hole,
            shot: shot.shot,
        });
    }
    for (field, value) in [("distance_before_m", shot.before_m), ("distance_after_m", shot.after_m)] {
        if !value.is_finite() || value < 0.0 {
            return Err(SgError::InvalidDistance {
                hole: shot.hole,
                shot: shot.shot,
                field,
                value,
            });
        }
    }
    Ok(())
}
