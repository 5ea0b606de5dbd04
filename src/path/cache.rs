use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{PropertyPath, ZeroCapacityError};

/// The number of distinct path strings the global cache remembers.
pub const DEFAULT_CAPACITY: usize = 1000;

static GLOBAL: Lazy<PathCache> = Lazy::new(PathCache::default);

/// Settings for a [`PathCache`]. Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathCacheConfig {
    pub capacity: usize,
}

impl Default for PathCacheConfig {
    fn default() -> Self {
        PathCacheConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// A bounded memo table from raw path strings to their parsed [`PropertyPath`]s.
///
/// Eviction is first-in-first-out: when the cache is full, the entry that was inserted earliest
/// is dropped before the new one is stored, regardless of how recently it was read. The length
/// never exceeds the capacity.
///
/// The check-evict-insert sequence runs under a single lock, so a cache can be shared between
/// threads.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `parse` (hit) | `O(1)`* |
/// | `parse` (miss) | `O(m)`, where `m` is the length of the path string |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
///
/// \* Amortised, as with any hash table lookup.
pub struct PathCache {
    state: Mutex<CacheState>,
    capacity: usize,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<Arc<str>, PropertyPath>,
    // Insertion order, oldest at the front.
    order: VecDeque<Arc<str>>,
}

impl PathCache {
    /// Creates an empty cache holding at most `capacity` paths.
    pub fn new(capacity: usize) -> Result<PathCache, ZeroCapacityError> {
        if capacity == 0 {
            return Err(ZeroCapacityError);
        }
        debug!(capacity, "created path cache");

        Ok(PathCache {
            state: Mutex::new(CacheState::default()),
            capacity,
        })
    }

    pub fn from_config(config: &PathCacheConfig) -> Result<PathCache, ZeroCapacityError> {
        PathCache::new(config.capacity)
    }

    /// Returns the process-wide cache used by the functions that don't take one explicitly.
    pub fn global() -> &'static PathCache {
        &GLOBAL
    }

    /// Returns the parsed form of `path`, parsing and storing it if it hasn't been seen (or has
    /// since been evicted).
    pub fn parse(&self, path: &str) -> PropertyPath {
        let mut state = self.state.lock();
        if let Some(cached) = state.entries.get(path) {
            return cached.clone();
        }

        let parsed = PropertyPath::split(path);

        if state.entries.len() >= self.capacity
            && let Some(oldest) = state.order.pop_front()
        {
            state.entries.remove(&oldest);
            trace!(evicted = %oldest, "path cache full");
        }

        let key: Arc<str> = Arc::from(path);
        state.order.push_back(Arc::clone(&key));
        state.entries.insert(key, parsed.clone());
        parsed
    }

    /// Returns true if `path` is currently cached. Doesn't insert anything.
    pub fn contains(&self, path: &str) -> bool {
        self.state.lock().entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets every cached path.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        trace!(dropped = state.entries.len(), "clearing path cache");
        state.entries.clear();
        state.order.clear();
    }
}

impl Default for PathCache {
    fn default() -> Self {
        PathCache {
            state: Mutex::new(CacheState::default()),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Debug for PathCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathCache")
            .field("len", &self.len())
            .field("cap", &self.capacity)
            .finish()
    }
}
