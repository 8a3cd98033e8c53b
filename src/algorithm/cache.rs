use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::algorithm::floyd_warshall::{AllPairsTable, FloydWarshall};
use crate::graph::RouteNetwork;
use crate::policy::{PolicyKey, WeightPolicy};

/// Hit/miss counters of an [`AllPairsCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

type Slot = Arc<OnceLock<Arc<AllPairsTable>>>;

/// Floyd-Warshall tables keyed by (criterion, product)
///
/// A cache belongs to exactly one loaded graph and is dropped with it, so a
/// reload always starts from an empty cache. Each key is computed at most
/// once: concurrent callers for the same key wait on the same slot.
#[derive(Debug, Default)]
pub struct AllPairsCache {
    slots: Mutex<HashMap<PolicyKey, Slot>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl AllPairsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `policy`, computing it on first use
    pub fn get_or_compute<G: RouteNetwork>(
        &self,
        graph: &G,
        policy: &WeightPolicy,
    ) -> Arc<AllPairsTable> {
        let key = policy.cache_key();
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.entry(key.clone()).or_default().clone()
        };

        let mut computed = false;
        let table = slot.get_or_init(|| {
            computed = true;
            Arc::new(FloydWarshall::compute(graph, policy))
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("All-pairs cache miss for {:?}", key);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("All-pairs cache hit for {:?}", key);
        }
        Arc::clone(table)
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
