//! Query orchestrator
//!
//! `RunSgService` owns the event store, the run cache and the curves, and
//! composes them behind the collaborator-facing operations:
//!
//! - `submit_score_event`: idempotent ingestion
//! - `get_run_sg`: snapshot → compile → cache lookup → compute → cache fill
//! - `cache_stats`: hit/miss counters
//!
//! The service holds no lock of its own.

mod query;
mod submit;

use std::sync::Arc;

use crate::cache::{CacheStats, RunSgCache};
use crate::compiler::Fingerprint;
use crate::config::ServiceConfig;
use crate::curves::ExpectedStrokes;
use crate::error::{ConfigError, SgError, SubmitError};
use crate::event_store::ScoreEventStore;
use crate::types::{RunSg, ScoreEventBody};
use crate::utils::{Clock, SystemClock};

pub use query::RunSgLookup;
pub use submit::SubmitResponse;

/// Strokes-gained service for a process
pub struct RunSgService {
    pub(crate) store: Arc<ScoreEventStore>,
    pub(crate) cache: RunSgCache,
    pub(crate) curves: Arc<ExpectedStrokes>,
}

impl RunSgService {
    /// Service with default configuration and the built-in baseline
    pub fn new() -> Self {
        Self {
            store: Arc::new(ScoreEventStore::new()),
            cache: RunSgCache::default(),
            curves: Arc::new(ExpectedStrokes::baseline().clone()),
        }
    }

    /// Service from validated configuration
    pub fn with_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        Self::with_config_and_clock(config, Arc::new(SystemClock))
    }

    /// Service from configuration with an explicit cache clock
    pub fn with_config_and_clock(config: &ServiceConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: Arc::new(ScoreEventStore::new()),
            cache: RunSgCache::from_config(&config.cache, clock)?,
            curves: Arc::new(ExpectedStrokes::baseline().clone()),
        })
    }

    /// Assemble a service from existing parts
    pub fn from_parts(store: Arc<ScoreEventStore>, cache: RunSgCache, curves: Arc<ExpectedStrokes>) -> Self {
        Self { store, cache, curves }
    }

    /// Replace the expected-strokes table
    pub fn with_curves(mut self, curves: Arc<ExpectedStrokes>) -> Self {
        self.curves = curves;
        self
    }

    pub fn store(&self) -> &Arc<ScoreEventStore> {
        &self.store
    }

    pub fn cache(&self) -> &RunSgCache {
        &self.cache
    }

    pub fn curves(&self) -> &ExpectedStrokes {
        &self.curves
    }
}

impl Default for RunSgService {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSgService {
    pub fn submit_score_event(&self, run_id: &str, body: ScoreEventBody) -> Result<SubmitResponse, SubmitError> {
        submit::submit_score_event(self, run_id, body)
    }

    pub fn get_run_sg(&self, run_id: &str) -> Result<Arc<RunSg>, SgError> {
        query::get_run_sg(self, run_id)
    }

    pub fn lookup(&self, run_id: &str) -> Result<RunSgLookup, SgError> {
        query::lookup(self, run_id)
    }

    pub fn fingerprint(&self, run_id: &str) -> Fingerprint {
        query::fingerprint(self, run_id)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
