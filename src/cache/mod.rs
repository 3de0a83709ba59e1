//! Run-SG Cache
//!
//! Memoizes [`RunSg`] values per run, validated by the shots fingerprint.
//! Entries expire after a TTL and the least recently used entries are
//! evicted beyond `maxsize`. There is no explicit invalidation: a changed
//! event set produces a different fingerprint, which reads as a miss.
//!
//! All state, counters included, sits behind one lock. The lock is never
//! held while a `RunSg` is computed; callers compute between `get` and `put`.

mod stats;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::compiler::Fingerprint;
use crate::config::CacheConfig;
use crate::error::ConfigError;
use crate::types::RunSg;
use crate::utils::{Clock, SystemClock};

pub use stats::CacheStats;

#[derive(Debug)]
struct CacheEntry {
    value: Arc<RunSg>,
    fingerprint: Fingerprint,
    /// `None` when the TTL reaches past what `Instant` can represent
    expires_at: Option<Instant>,
    /// Position in the recency order
    tick: u64,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    /// tick -> run_id, oldest first
    recency: BTreeMap<u64, String>,
    next_tick: u64,
    hits: u64,
    misses: u64,
}

impl CacheState {
    fn touch(&mut self, run_id: &str) {
        let tick = self.next_tick;
        self.next_tick += 1;
        if let Some(entry) = self.entries.get_mut(run_id) {
            self.recency.remove(&entry.tick);
            entry.tick = tick;
            self.recency.insert(tick, run_id.to_string());
        }
    }

    fn remove(&mut self, run_id: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(run_id)?;
        self.recency.remove(&entry.tick);
        Some(entry)
    }

    fn purge_expired(&mut self, now: Instant) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, e)| e.is_expired(now))
            .map(|(k, _)| k.clone())
            .collect();
        for run_id in &expired {
            self.remove(run_id);
            debug!(run_id = %run_id, "cache entry expired");
        }
        expired.len()
    }

    fn evict_to(&mut self, maxsize: usize) {
        while self.entries.len() > maxsize {
            let Some((_, run_id)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&run_id);
            debug!(run_id = %run_id, "cache entry evicted");
        }
    }
}

/// Fingerprint-validated LRU + TTL cache of run results
pub struct RunSgCache {
    maxsize: usize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    state: Mutex<CacheState>,
}

impl RunSgCache {
    /// Default capacity
    pub const DEFAULT_MAXSIZE: usize = 256;
    /// Default time to live
    pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

    /// Cache with explicit limits. Both must be strictly positive.
    pub fn new(maxsize: usize, ttl: Duration) -> Result<Self, ConfigError> {
        Self::with_clock(maxsize, ttl, Arc::new(SystemClock))
    }

    /// Cache reading time from `clock`
    pub fn with_clock(maxsize: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        if maxsize == 0 {
            return Err(ConfigError::ZeroMaxsize);
        }
        if ttl.is_zero() {
            return Err(ConfigError::ZeroTtl);
        }
        Ok(Self {
            maxsize,
            ttl,
            clock,
            state: Mutex::new(CacheState::default()),
        })
    }

    /// Cache built from configuration
    pub fn from_config(config: &CacheConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        Self::with_clock(config.maxsize, config.ttl(), clock)
    }

    pub fn maxsize(&self) -> usize {
        self.maxsize
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached result for `run_id` if present, unexpired, and computed for
    /// `fingerprint`. A hit moves the entry to most recently used.
    ///
    /// Misses are not counted here; see [`record_miss`](Self::record_miss).
    pub fn get(&self, run_id: &str, fingerprint: &Fingerprint) -> Option<Arc<RunSg>> {
        let now = self.clock.now();
        let mut state = self.state.lock();

        let expired = match state.entries.get(run_id) {
            None => return None,
            Some(entry) => entry.is_expired(now),
        };
        if expired {
            state.remove(run_id);
            debug!(run_id = %run_id, "cache entry expired");
            return None;
        }

        let value = match state.entries.get(run_id) {
            Some(entry) if entry.fingerprint == *fingerprint => Arc::clone(&entry.value),
            _ => return None,
        };

        state.touch(run_id);
        state.hits += 1;
        debug!(run_id = %run_id, fingerprint = %fingerprint, "cache hit");
        Some(value)
    }

    /// Insert or replace the entry for `run_id`, refreshing its TTL and
    /// recency, then purge expired entries and evict down to `maxsize`.
    pub fn put(&self, run_id: &str, value: Arc<RunSg>, fingerprint: Fingerprint) {
        let now = self.clock.now();
        let mut state = self.state.lock();

        state.remove(run_id);
        state.purge_expired(now);

        let tick = state.next_tick;
        state.next_tick += 1;
        state.recency.insert(tick, run_id.to_string());
        state.entries.insert(
            run_id.to_string(),
            CacheEntry {
                value,
                fingerprint,
                expires_at: now.checked_add(self.ttl),
                tick,
            },
        );

        state.evict_to(self.maxsize);
    }

    /// Count a miss. The caller decides what counts as one.
    pub fn record_miss(&self) {
        self.state.lock().misses += 1;
    }

    /// `(hits, misses)`
    pub fn counters(&self) -> (u64, u64) {
        let state = self.state.lock();
        (state.hits, state.misses)
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
        }
    }

    /// Drop every expired entry now; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        self.state.lock().purge_expired(now)
    }

    /// Entries currently held, expired ones included until purged
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RunSgCache {
    fn default() -> Self {
        Self {
            maxsize: Self::DEFAULT_MAXSIZE,
            ttl: Self::DEFAULT_TTL,
            clock: Arc::new(SystemClock),
            state: Mutex::new(CacheState::default()),
        }
    }
}

impl std::fmt::Debug for RunSgCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunSgCache")
            .field("maxsize", &self.maxsize)
            .field("ttl", &self.ttl)
            .field("stats", &self.stats())
            .finish()
    }
}
