//! # Request Cache
//!
//! Explicit request/response caching for the gateway read queries, keyed by
//! request parameters. Each entry carries its fetch time and expires after
//! the cache's TTL; an in-flight marker de-duplicates overlapping fetches
//! (the periodic poll racing an on-demand refresh).
//!
//! The last-known value, loading flag, and error of each query live in the
//! application state; this cache only decides *whether* a fetch should
//! happen right now.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: Option<V>,
    fetched_at: Option<Instant>,
    in_flight: bool,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
            in_flight: false,
        }
    }
}

/// TTL cache with in-flight de-duplication.
///
/// Thread-safe; locks are held only for map access, never across awaits.
pub struct RequestCache<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    ttl: Duration,
}

impl<K: Eq + Hash + Clone, V: Clone> RequestCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// The cached value for `key`, if one exists and is still fresh
    pub fn fresh(&self, key: &K) -> Option<V> {
        let entries = self.entries.lock();
        let entry = entries.get(key)?;
        let fetched_at = entry.fetched_at?;
        if fetched_at.elapsed() < self.ttl {
            entry.value.clone()
        } else {
            None
        }
    }

    /// Mark a fetch for `key` as started.
    ///
    /// Returns `false` when a fetch for the same key is already in flight,
    /// in which case the caller must not start another one.
    pub fn begin(&self, key: &K) -> bool {
        let mut entries = self.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        true
    }

    /// Store a completed fetch and release the in-flight marker
    pub fn complete(&self, key: &K, value: V) {
        let mut entries = self.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        entry.value = Some(value);
        entry.fetched_at = Some(Instant::now());
        entry.in_flight = false;
    }

    /// Record a failed fetch, releasing the in-flight marker so the next
    /// poll retries
    pub fn fail(&self, key: &K) {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.in_flight = false;
        }
    }

    /// Drop the cached value so the next poll refetches immediately
    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.value = None;
            entry.fetched_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_hit_within_ttl() {
        let cache: RequestCache<String, u64> = RequestCache::new(Duration::from_secs(60));
        let key = "supply".to_string();
        assert!(cache.fresh(&key).is_none());

        assert!(cache.begin(&key));
        cache.complete(&key, 42);
        assert_eq!(cache.fresh(&key), Some(42));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache: RequestCache<String, u64> = RequestCache::new(Duration::from_millis(10));
        let key = "supply".to_string();
        cache.begin(&key);
        cache.complete(&key, 42);

        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.fresh(&key).is_none());
    }

    #[test]
    fn test_begin_deduplicates_in_flight_fetches() {
        let cache: RequestCache<String, u64> = RequestCache::new(Duration::from_secs(60));
        let key = "supply".to_string();
        assert!(cache.begin(&key));
        assert!(!cache.begin(&key));

        cache.complete(&key, 1);
        assert!(cache.begin(&key));
    }

    #[test]
    fn test_fail_releases_in_flight_marker() {
        let cache: RequestCache<String, u64> = RequestCache::new(Duration::from_secs(60));
        let key = "supply".to_string();
        assert!(cache.begin(&key));
        cache.fail(&key);
        assert!(cache.begin(&key));
        assert!(cache.fresh(&key).is_none());
    }

    #[test]
    fn test_invalidate_clears_value() {
        let cache: RequestCache<String, u64> = RequestCache::new(Duration::from_secs(60));
        let key = "supply".to_string();
        cache.begin(&key);
        cache.complete(&key, 42);
        cache.invalidate(&key);
        assert!(cache.fresh(&key).is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let cache: RequestCache<(String, u64), &'static str> =
            RequestCache::new(Duration::from_secs(60));
        let a = ("addr".to_string(), 1);
        let b = ("addr".to_string(), 2);
        cache.begin(&a);
        cache.complete(&a, "one");
        assert_eq!(cache.fresh(&a), Some("one"));
        assert!(cache.fresh(&b).is_none());
    }
}
