//! Configuration Module
//!
//! Loads host configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::EvictionTrigger;

/// Host configuration parameters.
///
/// Every value can be set through the environment; unparseable values fall
/// back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the hosted cache
    pub capacity: usize,
    /// Eviction condition for the hosted cache
    pub eviction_trigger: EvictionTrigger,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `EVICTION_TRIGGER` - `occupancy` or `clock` (default: occupancy)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            eviction_trigger: env_or("EVICTION_TRIGGER", defaults.eviction_trigger),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            eviction_trigger: EvictionTrigger::Occupancy,
            server_port: 3000,
        }
    }
}
