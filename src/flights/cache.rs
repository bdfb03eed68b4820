use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use super::dto::PopularQueries;

struct CacheEntry {
    value: PopularQueries,
    expires_at: Instant,
}

/// Single-slot TTL cache for the popular-stats lists.
///
/// One slot for the whole process: every authenticated user observes the
/// same snapshot. The slot is empty at startup and invalidated purely by
/// time. Population is a read-check-then-write sequence with no lock held
/// across the upstream call, so concurrent misses may each fetch and
/// overwrite the slot with equivalent data (last writer wins).
#[derive(Clone, Default)]
pub struct StatsCache {
    slot: Arc<RwLock<Option<CacheEntry>>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached lists while the entry is still fresh.
    pub fn get(&self) -> Option<PopularQueries> {
        let slot = self.slot.read().expect("stats cache lock poisoned");
        slot.as_ref()
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Replaces the slot with a fresh entry expiring after `ttl`.
    pub fn put(&self, value: PopularQueries, ttl: Duration) {
        let mut slot = self.slot.write().expect("stats cache lock poisoned");
        *slot = Some(CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flights::dto::{PopularQueryItem, SearchType};

    fn sample() -> PopularQueries {
        PopularQueries {
            callsign: vec![PopularQueryItem {
                kind: SearchType::Callsign,
                query: "BAW123".into(),
                count: 12,
            }],
            aircraft: vec![],
            airline: vec![],
        }
    }

    #[test]
    fn empty_cache_misses() {
        let cache = StatsCache::new();
        assert!(cache.get().is_none());
    }

    #[test]
    fn fresh_entry_hits() {
        let cache = StatsCache::new();
        cache.put(sample(), Duration::from_secs(300));
        assert_eq!(cache.get(), Some(sample()));
    }

    #[test]
    fn expired_entry_misses() {
        let cache = StatsCache::new();
        cache.put(sample(), Duration::ZERO);
        assert!(cache.get().is_none());
    }

    #[test]
    fn put_overwrites_previous_entry() {
        let cache = StatsCache::new();
        cache.put(PopularQueries::default(), Duration::from_secs(300));
        cache.put(sample(), Duration::from_secs(300));
        assert_eq!(cache.get(), Some(sample()));
    }
}
