//! Utility functions and helpers
//!
//! Canonical JSON, numeric coercion, and the clock abstraction.

pub mod canonical;
pub mod clock;
pub mod coerce;

pub use canonical::{canonical_json, round4};
pub use clock::{Clock, ManualClock, SystemClock};
pub use coerce::{coerce_f64, coerce_i64};
