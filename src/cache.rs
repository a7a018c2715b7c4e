//! Bounded TTL cache for read-heavy listing endpoints.
//!
//! An explicit component rather than process-global state: construct one
//! with a capacity, a default time-to-live, and a clock, then inject it
//! wherever responses are worth reusing. Reads through an expired entry
//! evict it lazily; [`TtlCache::clean_expired`] sweeps eagerly; and at
//! capacity the least recently used live entry is evicted. All time reads
//! go through the injected [`Clock`], so expiry is deterministic under
//! test.

use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Bounded key/value cache with per-entry time-to-live.
///
/// Values are cloned out on read, so cached types are expected to be cheap
/// to clone (typically `Arc`-wrapped response payloads). Last write wins
/// on concurrent `set` calls for the same key.
pub struct TtlCache<V, C>
where
    V: Clone,
    C: Clock,
{
    state: Mutex<CacheState<V>>,
    capacity: usize,
    default_ttl: Duration,
    clock: Arc<C>,
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    tick: u64,
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
    ttl: Duration,
    last_access: u64,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.stored_at + self.ttl
    }
}

impl<V, C> TtlCache<V, C>
where
    V: Clone,
    C: Clock,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is treated as one: a cache that can never hold an
    /// entry is a misconfiguration, not a useful degenerate case.
    #[must_use]
    pub fn new(capacity: usize, default_ttl: Duration, clock: Arc<C>) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                tick: 0,
            }),
            capacity: capacity.max(1),
            default_ttl,
            clock,
        }
    }

    /// Returns the cached value for `key` when present and not expired.
    ///
    /// An expired entry is evicted on the spot; a hit refreshes the
    /// entry's recency.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.utc();
        let mut state = self.lock();
        state.tick += 1;
        let tick = state.tick;

        let expired = state
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now));
        if expired {
            state.entries.remove(key);
            return None;
        }

        state.entries.get_mut(key).map(|entry| {
            entry.last_access = tick;
            entry.value.clone()
        })
    }

    /// Stores `value` under `key` with the default time-to-live.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Stores `value` under `key` with an explicit time-to-live.
    ///
    /// At capacity, expired entries are dropped first; if the cache is
    /// still full, the least recently used entry makes room.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let cache_key = key.into();
        let now = self.clock.utc();
        let mut state = self.lock();
        state.tick += 1;
        let tick = state.tick;

        if !state.entries.contains_key(&cache_key) && state.entries.len() >= self.capacity {
            state.entries.retain(|_, entry| !entry.is_expired(now));
        }
        if !state.entries.contains_key(&cache_key) && state.entries.len() >= self.capacity {
            let victim = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(candidate, _)| candidate.clone());
            if let Some(victim) = victim {
                state.entries.remove(&victim);
            }
        }

        state.entries.insert(
            cache_key,
            CacheEntry {
                value,
                stored_at: now,
                ttl,
                last_access: tick,
            },
        );
    }

    /// Drops the entry under `key`, returning its value if it was present
    /// and live.
    pub fn invalidate(&self, key: &str) -> Option<V> {
        let now = self.clock.utc();
        let mut state = self.lock();
        state
            .entries
            .remove(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value)
    }

    /// Eagerly removes every expired entry and reports how many went.
    pub fn clean_expired(&self) -> usize {
        let now = self.clock.utc();
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired(now));
        before - state.entries.len()
    }

    /// Counts the live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = self.clock.utc();
        let state = self.lock();
        state
            .entries
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Reports whether no live entry remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locks the state, recovering from a poisoned mutex.
    ///
    /// A panic while holding the lock cannot leave the map structurally
    /// inconsistent, so continuing with the inner state is safe.
    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::TtlCache;
    use crate::test_support::ManualClock;
    use chrono::Duration;
    use std::sync::Arc;

    fn cache(capacity: usize) -> (TtlCache<String, ManualClock>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::fixed());
        let cache = TtlCache::new(capacity, Duration::minutes(5), Arc::clone(&clock));
        (cache, clock)
    }

    #[test]
    fn get_returns_value_before_expiry_and_absent_after() {
        let (cache, clock) = cache(8);
        cache.set_with_ttl("inquiries:list", "payload".to_owned(), Duration::milliseconds(100));

        assert_eq!(cache.get("inquiries:list"), Some("payload".to_owned()));

        clock.advance(Duration::milliseconds(150));
        assert_eq!(cache.get("inquiries:list"), None);
        assert!(cache.is_empty(), "expired entry is evicted on read");
    }

    #[test]
    fn last_write_wins_for_the_same_key() {
        let (cache, _clock) = cache(8);
        cache.set("tasks:list", "first".to_owned());
        cache.set("tasks:list", "second".to_owned());

        assert_eq!(cache.get("tasks:list"), Some("second".to_owned()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clean_expired_sweeps_only_stale_entries() {
        let (cache, clock) = cache(8);
        cache.set_with_ttl("short", "a".to_owned(), Duration::milliseconds(100));
        cache.set_with_ttl("long", "b".to_owned(), Duration::minutes(10));

        clock.advance(Duration::seconds(1));
        let removed = cache.clean_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.get("long"), Some("b".to_owned()));
    }

    #[test]
    fn capacity_overflow_evicts_the_least_recently_used() {
        let (cache, _clock) = cache(2);
        cache.set("a", "1".to_owned());
        cache.set("b", "2".to_owned());

        // Touch "a" so "b" becomes the least recently used.
        assert_eq!(cache.get("a"), Some("1".to_owned()));
        cache.set("c", "3".to_owned());

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some("1".to_owned()));
        assert_eq!(cache.get("c"), Some("3".to_owned()));
    }

    #[test]
    fn expired_entries_make_room_before_live_ones_are_evicted() {
        let (cache, clock) = cache(2);
        cache.set_with_ttl("stale", "x".to_owned(), Duration::milliseconds(50));
        cache.set("fresh", "y".to_owned());

        clock.advance(Duration::milliseconds(80));
        cache.set("new", "z".to_owned());

        assert_eq!(cache.get("fresh"), Some("y".to_owned()));
        assert_eq!(cache.get("new"), Some("z".to_owned()));
    }

    #[test]
    fn invalidate_drops_a_live_entry() {
        let (cache, _clock) = cache(8);
        cache.set("tasks:list", "payload".to_owned());

        assert_eq!(cache.invalidate("tasks:list"), Some("payload".to_owned()));
        assert_eq!(cache.get("tasks:list"), None);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let (cache, _clock) = cache(0);
        cache.set("only", "entry".to_owned());
        assert_eq!(cache.get("only"), Some("entry".to_owned()));

        cache.set("next", "entry".to_owned());
        assert_eq!(cache.len(), 1);
    }
}
