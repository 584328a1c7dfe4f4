// ABOUTME: Bounded per-key TTL cache for provider responses to save provider quota
// ABOUTME: Least recently used entries are evicted at capacity; a zero TTL disables caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_core::constants::limits::DEFAULT_PROVIDER_CACHE_CAPACITY;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// String-keyed LRU cache with a fixed TTL
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    entries: Arc<RwLock<LruCache<String, CacheEntry<T>>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    /// Fallback capacity when zero is requested
    const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PROVIDER_CACHE_CAPACITY)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache of the default capacity whose entries live for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_PROVIDER_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries that live for `ttl`
    #[must_use]
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::FALLBACK_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Whether entries are ever stored
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fetch a live entry, dropping it if expired
    pub async fn get(&self, key: &str) -> Option<T> {
        if !self.is_enabled() {
            return None;
        }
        // LruCache::get updates recency, so it needs the write lock
        let mut cache = self.entries.write().await;
        match cache.get(key) {
            Some(entry) if entry.is_expired() => {
                cache.pop(key);
                None
            }
            Some(entry) => Some(entry.data.clone()),
            None => None,
        }
    }

    /// Store an entry, evicting the least recently used one at capacity
    pub async fn insert(&self, key: String, data: T) {
        if !self.is_enabled() {
            return;
        }
        let entry = CacheEntry {
            data,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.push(key, entry);
    }

    /// Maximum number of entries held
    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    /// Number of stored entries (expired ones included until looked up or evicted)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop all entries
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
