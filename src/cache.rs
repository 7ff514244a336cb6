//! Component H: a thread-safe least-frequently-used cache bounding memory
//! for hot forms. Access counts, not recency, drive eviction, favoring a
//! stable hot set over recent bursts — the right trade-off for a
//! corpus-processing workload that revisits the same few thousand forms
//! far more often than the long tail.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Cache size cap matching the default in the original implementation.
pub const DEFAULT_CAPACITY: usize = 4096;

struct State<K, V> {
    values: HashMap<K, V>,
    counts: HashMap<K, u64>,
}

/// A thread-safe LFU cache. `lookup` releases its internal mutex while
/// `compute` runs, since `compute` may re-enter the cache recursively (a
/// compound-slicing lookup that looks up its own parts, for instance) —
/// holding the lock across that call would deadlock a self-re-entrant miss.
pub struct LfuCache<K, V> {
    state: Mutex<State<K, V>>,
    capacity: usize,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State { values: HashMap::new(), counts: HashMap::new() }),
            capacity,
        }
    }

    /// Look up `key`, computing and caching via `compute` on a miss.
    pub fn lookup(&self, key: &K, compute: impl FnOnce() -> V) -> V {
        {
            let mut state = self.state.lock().unwrap();
            if let Some(value) = state.values.get(key).cloned() {
                *state.counts.entry(key.clone()).or_insert(0) += 1;
                return value;
            }
        }

        let value = compute();

        let mut state = self.state.lock().unwrap();
        state.values.insert(key.clone(), value.clone());
        *state.counts.entry(key.clone()).or_insert(0) += 1;
        if state.values.len() > self.capacity {
            Self::evict(&mut state);
        }
        value
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict the bottom 10% of entries by access count (a min-heap
    /// selection over counts), not by recency.
    fn evict(state: &mut State<K, V>) {
        let evict_count = (state.values.len() / 10).max(1);
        let mut by_count: Vec<(K, u64)> =
            state.counts.iter().map(|(k, &c)| (k.clone(), c)).collect();
        if evict_count >= by_count.len() {
            return;
        }
        by_count.select_nth_unstable_by_key(evict_count, |(_, c)| *c);
        for (key, _) in by_count.into_iter().take(evict_count) {
            state.values.remove(&key);
            state.counts.remove(&key);
        }
    }
}
