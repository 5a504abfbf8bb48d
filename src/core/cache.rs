//! Read-through cache for depth chart queries
//!
//! An in-memory LRU cache whose entries expire after a fixed time-to-live.
//! It sits in front of the two read endpoints; writes invalidate every entry
//! for the affected sport/team instead of trying to patch cached values.

use lru::LruCache;
use serde::Serialize;
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};
use tracing::debug;

use crate::{
    cli::types::{SportId, TeamId},
    config::CacheConfig,
    roster::{DepthChart, Player},
};

/// Generic cache key scoped to one sport/team
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// The sport/team whose writes invalidate this entry
    fn scope(&self) -> (SportId, TeamId);
}

/// Cache key for backups queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackupsCacheKey {
    pub sport_id: SportId,
    pub team_id: TeamId,
    pub position: String,
    pub number: u32,
}

impl CacheKey for BackupsCacheKey {
    fn scope(&self) -> (SportId, TeamId) {
        (self.sport_id, self.team_id)
    }
}

/// Cache key for full depth chart queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepthChartCacheKey {
    pub sport_id: SportId,
    pub team_id: TeamId,
}

impl CacheKey for DepthChartCacheKey {
    fn scope(&self) -> (SportId, TeamId) {
        (self.sport_id, self.team_id)
    }
}

/// LRU cache with per-entry expiry
pub struct TtlCache<K, V>
where
    K: CacheKey,
    V: Clone,
{
    entries: Mutex<LruCache<K, (Instant, V)>>,
    capacity: usize,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: CacheKey,
    V: Clone,
{
    /// Create a new cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
            ttl,
        }
    }

    /// Get an unexpired item; expired entries are evicted on the way out
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();

        let expired = match entries.get(key) {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => {
                return Some(value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
        }
        None
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, (Instant::now(), value));
    }

    /// Drop every entry belonging to the given sport/team.
    ///
    /// Returns how many entries were removed.
    pub fn invalidate_scope(&self, sport_id: SportId, team_id: TeamId) -> usize {
        let mut entries = self.lock();

        let stale: Vec<K> = entries
            .iter()
            .filter(|(key, _)| key.scope() == (sport_id, team_id))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            entries.pop(key);
        }
        stale.len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn memory_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.lock().len(),
            capacity: self.capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, (Instant, V)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Occupancy of one cache, reported by `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
}

/// Snapshot of the write counters a cached read was computed under.
///
/// Taken before reading the store; a result is only cached if no write to
/// the same sport/team (and no global clear) happened in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeneration {
    epoch: u64,
    team: u64,
}

#[derive(Debug, Default)]
struct Generations {
    epoch: u64,
    teams: HashMap<(SportId, TeamId), u64>,
}

impl Generations {
    fn current(&self, scope: (SportId, TeamId)) -> CacheGeneration {
        CacheGeneration {
            epoch: self.epoch,
            team: self.teams.get(&scope).copied().unwrap_or(0),
        }
    }
}

/// Caches for both read endpoints
pub struct CacheManager {
    pub backups: TtlCache<BackupsCacheKey, Vec<Player>>,
    pub depth_chart: TtlCache<DepthChartCacheKey, DepthChart>,
    // Held while bumping + invalidating and while checking + inserting, so
    // an insert either lands before the invalidation or is refused.
    generations: Mutex<Generations>,
}

impl CacheManager {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            backups: TtlCache::new(config.capacity, config.ttl),
            depth_chart: TtlCache::new(config.capacity, config.ttl),
            generations: Mutex::new(Generations::default()),
        }
    }

    /// Current write generation for a sport/team; take it before reading the store
    pub fn generation(&self, sport_id: SportId, team_id: TeamId) -> CacheGeneration {
        self.lock_generations().current((sport_id, team_id))
    }

    /// Cache `value` unless a write to its sport/team happened after
    /// `generation` was taken. Returns whether the value was stored.
    pub fn put_if_current<K, V>(
        &self,
        cache: &TtlCache<K, V>,
        generation: CacheGeneration,
        key: K,
        value: V,
    ) -> bool
    where
        K: CacheKey,
        V: Clone,
    {
        let generations = self.lock_generations();
        if generations.current(key.scope()) != generation {
            debug!("skipping cache insert computed before a write");
            return false;
        }
        cache.put(key, value);
        true
    }

    /// Forget everything cached for a sport/team after a write
    pub fn invalidate_team(&self, sport_id: SportId, team_id: TeamId) {
        let mut generations = self.lock_generations();
        *generations.teams.entry((sport_id, team_id)).or_insert(0) += 1;

        let removed = self.backups.invalidate_scope(sport_id, team_id)
            + self.depth_chart.invalidate_scope(sport_id, team_id);
        debug!(sport = %sport_id, team = %team_id, removed, "invalidated cached queries");
    }

    pub fn clear_all(&self) {
        let mut generations = self.lock_generations();
        generations.epoch += 1;

        self.backups.clear();
        self.depth_chart.clear();
    }

    /// Get memory usage statistics for all caches
    pub fn memory_stats(&self) -> BTreeMap<String, CacheStats> {
        let mut stats = BTreeMap::new();
        stats.insert("backups".to_string(), self.backups.memory_stats());
        stats.insert("depth_chart".to_string(), self.depth_chart.memory_stats());
        stats
    }

    fn lock_generations(&self) -> MutexGuard<'_, Generations> {
        self.generations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn chart_key(sport: u32, team: u32) -> DepthChartCacheKey {
        DepthChartCacheKey {
            sport_id: SportId::new(sport),
            team_id: TeamId::new(team),
        }
    }

    fn backups_key(sport: u32, team: u32, number: u32) -> BackupsCacheKey {
        BackupsCacheKey {
            sport_id: SportId::new(sport),
            team_id: TeamId::new(team),
            position: "QB".to_string(),
            number,
        }
    }

    #[test]
    fn test_put_and_hit() {
        let cache: TtlCache<DepthChartCacheKey, String> =
            TtlCache::new(4, Duration::from_secs(60));

        cache.put(chart_key(1, 101), "chart".to_string());
        assert_eq!(cache.get(&chart_key(1, 101)), Some("chart".to_string()));
        assert_eq!(cache.get(&chart_key(1, 102)), None);
    }

    #[test]
    fn test_expired_entry_is_a_miss_and_evicted() {
        let cache: TtlCache<DepthChartCacheKey, u32> =
            TtlCache::new(4, Duration::from_millis(10));

        cache.put(chart_key(1, 101), 7);
        sleep(Duration::from_millis(30));

        assert_eq!(cache.get(&chart_key(1, 101)), None);
        assert_eq!(cache.memory_stats().entries, 0);
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let cache: TtlCache<BackupsCacheKey, u32> = TtlCache::new(2, Duration::from_secs(60));

        cache.put(backups_key(1, 101, 1), 1);
        cache.put(backups_key(1, 101, 2), 2);
        cache.put(backups_key(1, 101, 3), 3);

        let stats = cache.memory_stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.capacity, 2);
        assert_eq!(cache.get(&backups_key(1, 101, 1)), None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: TtlCache<DepthChartCacheKey, u32> = TtlCache::new(0, Duration::from_secs(1));
        assert_eq!(
            cache.memory_stats(),
            CacheStats {
                entries: 0,
                capacity: 1
            }
        );
    }

    #[test]
    fn test_invalidate_scope_only_touches_matching_team() {
        let cache: TtlCache<BackupsCacheKey, u32> = TtlCache::new(8, Duration::from_secs(60));

        cache.put(backups_key(1, 101, 12), 1);
        cache.put(backups_key(1, 101, 11), 2);
        cache.put(backups_key(1, 102, 12), 3);
        cache.put(backups_key(2, 101, 12), 4);

        let removed = cache.invalidate_scope(SportId::new(1), TeamId::new(101));
        assert_eq!(removed, 2);
        assert_eq!(cache.get(&backups_key(1, 102, 12)), Some(3));
        assert_eq!(cache.get(&backups_key(2, 101, 12)), Some(4));
        assert_eq!(cache.get(&backups_key(1, 101, 12)), None);
    }

    #[test]
    fn test_cache_manager_creation() {
        let manager = CacheManager::default();
        let stats = manager.memory_stats();

        assert!(stats.contains_key("backups"));
        assert!(stats.contains_key("depth_chart"));

        for (_, stats) in stats {
            assert_eq!(stats.entries, 0);
            assert_eq!(stats.capacity, CacheConfig::default().capacity);
        }
    }

    #[test]
    fn test_cache_manager_invalidate_team() {
        let manager = CacheManager::default();
        manager.depth_chart.put(chart_key(1, 101), DepthChart::new());
        manager.backups.put(backups_key(1, 101, 12), Vec::new());
        manager.depth_chart.put(chart_key(2, 201), DepthChart::new());

        manager.invalidate_team(SportId::new(1), TeamId::new(101));

        assert!(manager.depth_chart.get(&chart_key(1, 101)).is_none());
        assert!(manager.backups.get(&backups_key(1, 101, 12)).is_none());
        assert!(manager.depth_chart.get(&chart_key(2, 201)).is_some());

        manager.clear_all();
        assert!(manager.depth_chart.get(&chart_key(2, 201)).is_none());
    }

    #[test]
    fn test_put_if_current_refuses_results_older_than_a_write() {
        let manager = CacheManager::default();
        let (sport, team) = (SportId::new(1), TeamId::new(101));

        // Reader takes its generation, then a write lands before it caches
        let stale = manager.generation(sport, team);
        manager.invalidate_team(sport, team);

        assert!(!manager.put_if_current(
            &manager.depth_chart,
            stale,
            chart_key(1, 101),
            DepthChart::new()
        ));
        assert!(manager.depth_chart.get(&chart_key(1, 101)).is_none());

        let fresh = manager.generation(sport, team);
        assert!(manager.put_if_current(
            &manager.depth_chart,
            fresh,
            chart_key(1, 101),
            DepthChart::new()
        ));
        assert!(manager.depth_chart.get(&chart_key(1, 101)).is_some());
    }

    #[test]
    fn test_writes_to_other_teams_do_not_stale_a_generation() {
        let manager = CacheManager::default();
        let generation = manager.generation(SportId::new(1), TeamId::new(101));

        manager.invalidate_team(SportId::new(1), TeamId::new(102));
        manager.invalidate_team(SportId::new(2), TeamId::new(101));

        assert!(manager.put_if_current(&manager.backups, generation, backups_key(1, 101, 12), Vec::new()));
    }

    #[test]
    fn test_clear_all_stales_every_generation() {
        let manager = CacheManager::default();
        let generation = manager.generation(SportId::new(2), TeamId::new(201));

        manager.clear_all();

        assert!(!manager.put_if_current(&manager.backups, generation, backups_key(2, 201, 23), Vec::new()));
        assert_eq!(manager.memory_stats()["backups"].entries, 0);
    }
}
