use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use lru::LruCache;
use parking_lot::Mutex;
use crate::core::stats::CacheStats;
use crate::core::types::Facet;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ResolutionKey {
    pub facet: Facet,
    pub term: String,
}

impl ResolutionKey {
    pub fn new(facet: Facet, term: &str) -> Self {
        ResolutionKey {
            facet,
            term: term.trim().to_lowercase(),
        }
    }
}

struct CacheState {
    /// Catalog generation the entries were computed against
    generation: u64,
    entries: LruCache<ResolutionKey, Option<String>>,
}

/// Memoised fuzzy resolutions (term -> resolved name, or no match).
///
/// Entries are only valid for the catalog generation they were computed at;
/// the first lookup against a newer generation empties the cache.
pub struct ResolutionCache {
    state: Option<Mutex<CacheState>>,
    capacity: usize,
    hit_count: AtomicUsize,
    miss_count: AtomicUsize,
}

impl ResolutionCache {
    /// A zero capacity gives a cache that never stores anything.
    pub fn new(capacity: usize) -> Self {
        let state = NonZeroUsize::new(capacity).map(|cap| {
            Mutex::new(CacheState {
                generation: 0,
                entries: LruCache::new(cap),
            })
        });
        ResolutionCache {
            state,
            capacity,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        }
    }

    /// `Some(resolution)` on a hit, `None` on a miss.
    pub fn get(&self, key: &ResolutionKey, generation: u64) -> Option<Option<String>> {
        let found = self.state.as_ref().and_then(|state| {
            let mut state = state.lock();
            if state.generation != generation {
                state.entries.clear();
                state.generation = generation;
                return None;
            }
            state.entries.get(key).cloned()
        });

        if found.is_some() {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    pub fn put(&self, key: ResolutionKey, generation: u64, resolution: Option<String>) {
        if let Some(state) = &self.state {
            let mut state = state.lock();
            if state.generation != generation {
                state.entries.clear();
                state.generation = generation;
            }
            state.entries.put(key, resolution);
        }
    }

    pub fn clear(&self) {
        if let Some(state) = &self.state {
            state.lock().entries.clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.state.as_ref().map_or(0, |state| state.lock().entries.len()),
            capacity: self.capacity,
        }
    }
}
