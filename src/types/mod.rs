//! Data types for the strokes-gained pipeline
//!
//! Events as producers submit them, shots as the engine consumes them, and
//! the strokes-gained results handed back to callers.

mod score_event;
mod sg;
mod shot;

pub use score_event::{ScoreEvent, ScoreEventBody, StoredEvent, SubmitOutcome, SubmitStatus, SHOT_KIND};
pub use sg::{HoleSg, RunSg, ShotSg};
pub use shot::{Lie, Penalty, ShotEvent};
