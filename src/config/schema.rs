//! Configuration schema definitions.
//!
//! This module defines the pool-tuning configuration. All types derive
//! Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::pool::DEFAULT_CAPACITY;

/// Root configuration for the message pools.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MessageConfig {
    /// URI pool settings.
    pub uri_pool: PoolConfig,

    /// Client request pool settings.
    pub request_pool: PoolConfig,

    /// Response pool settings.
    pub response_pool: PoolConfig,

    /// Server request pool settings.
    pub server_request_pool: PoolConfig,
}

/// Settings for one object pool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Free-list capacity. Bounds growth under load spikes; instances
    /// beyond it are dropped instead of recycled.
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
