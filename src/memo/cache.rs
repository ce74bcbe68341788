use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Policy for a memoization cache.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MemoOpts {
    /// Maximum retained entries. `0` disables retention.
    pub max_entries: usize,
    /// Entries older than this are treated as misses and evicted on access.
    pub max_age: Duration,
    /// Decimal places floats are rounded to before keying.
    pub precision: u32,
    /// When `false`, every call goes straight to the wrapped function.
    pub enabled: bool,
}

impl MemoOpts {
    /// Geometry caches: small and short-lived.
    pub fn geometry() -> Self {
        Self {
            max_entries: 100,
            max_age: Duration::from_secs(60),
            precision: 2,
            enabled: true,
        }
    }

    /// Colour caches: many tiny values, kept longer.
    pub fn color() -> Self {
        Self {
            max_entries: 1000,
            max_age: Duration::from_secs(300),
            precision: 2,
            enabled: true,
        }
    }

    /// Same policy with caching switched off.
    pub fn disabled(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }
}

impl Default for MemoOpts {
    fn default() -> Self {
        Self::geometry()
    }
}

/// Hit/miss counters for a [`MemoCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing usable.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
    /// Entries dropped for exceeding `max_age`.
    pub expirations: u64,
}

struct Entry<T> {
    value: T,
    inserted_at: Instant,
    tick: u64,
}

/// String-keyed LRU cache with age expiry.
///
/// Recency is tracked with a monotonically increasing access tick; `order` maps ticks back to
/// keys, so its first entry is always the least recently used. Not synchronized: share one per
/// thread, or wrap it externally.
pub struct MemoCache<T> {
    max_entries: usize,
    max_age: Duration,
    entries: HashMap<String, Entry<T>>,
    order: BTreeMap<u64, String>,
    next_tick: u64,
    stats: CacheStats,
}

impl<T> MemoCache<T> {
    /// Create an empty cache using the size and age limits from `opts`.
    pub fn new(opts: MemoOpts) -> Self {
        Self {
            max_entries: opts.max_entries,
            max_age: opts.max_age,
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_tick: 0,
            stats: CacheStats::default(),
        }
    }

    /// Number of live entries (expired ones are only dropped on access).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters since creation or the last [`MemoCache::clear`].
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry and reset counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::default();
    }

    /// `true` when `key` is present, without touching recency or expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up `key` now. See [`MemoCache::get_at`].
    pub fn get(&mut self, key: &str) -> Option<&T> {
        self.get_at(key, Instant::now())
    }

    /// Look up `key` as of `now`.
    ///
    /// An entry older than `max_age` is evicted and reported as a miss. A hit makes the entry
    /// most recently used; its insertion timestamp is kept.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<&T> {
        let expired = match self.entries.get(key) {
            None => {
                self.stats.misses += 1;
                return None;
            }
            Some(e) => now.saturating_duration_since(e.inserted_at) > self.max_age,
        };

        if expired {
            self.remove(key);
            self.stats.expirations += 1;
            self.stats.misses += 1;
            tracing::trace!(key, "memo entry expired");
            return None;
        }

        let tick = self.bump_tick();
        let entry = self.entries.get_mut(key)?;
        self.order.remove(&entry.tick);
        entry.tick = tick;
        self.order.insert(tick, key.to_owned());
        self.stats.hits += 1;
        Some(&entry.value)
    }

    /// Insert `value` under `key` now. See [`MemoCache::insert_at`].
    pub fn insert(&mut self, key: String, value: T) {
        self.insert_at(key, value, Instant::now());
    }

    /// Insert `value` under `key` as of `now`, replacing any previous value.
    ///
    /// At capacity, the single least recently used entry is evicted first.
    pub fn insert_at(&mut self, key: String, value: T, now: Instant) {
        if self.max_entries == 0 {
            return;
        }
        self.remove(&key);

        if self.entries.len() >= self.max_entries
            && let Some((_, lru_key)) = self.order.pop_first()
        {
            self.entries.remove(&lru_key);
            self.stats.evictions += 1;
            tracing::trace!(key = %lru_key, "memo entry evicted");
        }

        let tick = self.bump_tick();
        self.order.insert(tick, key.clone());
        self.entries.insert(
            key,
            Entry {
                value,
                inserted_at: now,
                tick,
            },
        );
    }

    fn remove(&mut self, key: &str) -> Option<T> {
        let entry = self.entries.remove(key)?;
        self.order.remove(&entry.tick);
        Some(entry.value)
    }

    fn bump_tick(&mut self) -> u64 {
        let t = self.next_tick;
        self.next_tick += 1;
        t
    }
}

impl<T: Clone> MemoCache<T> {
    /// Return the cached value for `key`, computing and storing it with `f` on a miss.
    pub fn get_or_insert_with(&mut self, key: String, f: impl FnOnce() -> T) -> T {
        let now = Instant::now();
        if let Some(v) = self.get_at(&key, now) {
            return v.clone();
        }
        let v = f();
        self.insert_at(key, v.clone(), now);
        v
    }
}

impl<T> std::fmt::Debug for MemoCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.entries.len())
            .field("max_entries", &self.max_entries)
            .field("max_age", &self.max_age)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memo/cache.rs"]
mod tests;
