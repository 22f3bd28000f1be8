//! Key-value client interface.
//!
//! External collaborator contract: the surrounding runtime provides an
//! implementation (consul-style catalog, local store, ...). Nothing in the
//! pooling or translation layers depends on it; the trait exists so
//! request-handling code above this crate can take `Arc<dyn Kv>` without
//! caring which backend is wired in.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Backend-agnostic options, passed through verbatim.
pub type KvOptions = HashMap<String, String>;

/// Response from the key-value backend: status and body, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Failure reported by the key-value backend.
#[derive(Debug, Error)]
#[error("key-value backend error: {0}")]
pub struct KvError(pub String);

/// Key-value store operations over a string key.
#[async_trait]
pub trait Kv: Send + Sync {
    async fn get(&self, key: &str, options: &KvOptions) -> Result<KvResponse, KvError>;

    async fn put(&self, key: &str, value: Bytes, options: &KvOptions)
        -> Result<KvResponse, KvError>;

    async fn delete(&self, key: &str, options: &KvOptions) -> Result<KvResponse, KvError>;
}
