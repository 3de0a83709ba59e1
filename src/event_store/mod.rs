//! Score Event Store
//!
//! - `ScoreEventStore`: append-only, deduplicated per-run event log
//! - `order_events`: snapshot ordering by `(ts, canonical_json)`
//! - `EventStoreStats`: counters for diagnostics
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌──────────┐    ┌──────────────┐    ┌────────────────────────┐
//! │ Producer │───►│ validate body│───►│ lock: insert if absent │───► stored | duplicate
//! └──────────┘    └──────────────┘    └────────────────────────┘
//!
//! Read Path:
//! ┌─────────────────────┐    ┌──────────────────────────┐
//! │ lock: copy run's    │───►│ sort (ts, canonical json)│───► snapshot
//! │ events              │    └──────────────────────────┘
//! └─────────────────────┘
//! ```

mod snapshot;
mod stats;
mod store;

pub use snapshot::order_events;
pub use stats::EventStoreStats;
pub use store::ScoreEventStore;
