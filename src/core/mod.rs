//! Core utilities shared by the HTTP layer
//!
//! - `cache`: Read-through TTL cache for depth chart queries

pub mod cache;

pub use cache::{
    BackupsCacheKey, CacheGeneration, CacheKey, CacheManager, CacheStats, DepthChartCacheKey,
    TtlCache,
};
