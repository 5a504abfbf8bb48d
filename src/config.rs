//! Runtime configuration for the HTTP service

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use crate::{error::Result, BIND_ADDR_ENV_VAR};

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Read-through cache settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Server configuration assembled from CLI flags and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cache: CacheConfig,
    /// Load the sample roster before accepting requests
    pub seed_on_start: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            cache: CacheConfig::default(),
            seed_on_start: false,
        }
    }
}

/// Resolve the bind address from an explicit flag, then the
/// `DEPTH_CHART_ADDR` environment variable, then the default.
///
/// A set but unparsable environment value is an error rather than being
/// silently replaced by the default.
pub fn resolve_bind_addr(addr: Option<SocketAddr>) -> Result<SocketAddr> {
    if let Some(addr) = addr {
        return Ok(addr);
    }

    match std::env::var(BIND_ADDR_ENV_VAR) {
        Ok(value) => Ok(value.trim().parse()?),
        Err(_) => Ok(DEFAULT_BIND_ADDR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepthChartError;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(DEFAULT_BIND_ADDR.to_string(), "127.0.0.1:8080");
        assert_eq!(config.cache.ttl, Duration::from_secs(300));
        assert_eq!(config.cache.capacity, 256);
        assert!(!config.seed_on_start);
    }

    // Env var handling lives in one test so parallel tests never race on it.
    #[test]
    fn test_resolve_bind_addr() {
        let explicit: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        assert_eq!(resolve_bind_addr(Some(explicit)).unwrap(), explicit);

        std::env::remove_var(BIND_ADDR_ENV_VAR);
        assert_eq!(resolve_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);

        std::env::set_var(BIND_ADDR_ENV_VAR, "127.0.0.1:9100");
        assert_eq!(resolve_bind_addr(None).unwrap().port(), 9100);

        // Explicit flag still wins over the environment
        assert_eq!(resolve_bind_addr(Some(explicit)).unwrap(), explicit);

        std::env::set_var(BIND_ADDR_ENV_VAR, "not-an-address");
        match resolve_bind_addr(None) {
            Err(DepthChartError::InvalidAddress(_)) => (),
            other => panic!("Expected InvalidAddress, got {:?}", other),
        }

        std::env::remove_var(BIND_ADDR_ENV_VAR);
    }
}
