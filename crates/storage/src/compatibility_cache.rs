//! CompatibilityCache - persistent result cache for the lookup pipeline
//!
//! Point lookups keyed by the normalized query string. Writes are
//! last-write-wins; there is no TTL and no eviction. Hit/miss counters
//! are process-local.

use async_trait::async_trait;
use parking_lot::RwLock;
use sled::Tree;
use std::sync::Arc;
use tracing::{debug, warn};

use domain::errors::{DomainError, DomainResult};
use domain::repositories::CompatibilityCacheRepository;
use domain::value_objects::CompatibilityResult;

use crate::document_store::{DocumentStore, COMPATIBILITY_CACHE_TREE};

#[derive(Debug, Default)]
struct CacheStats {
    hits: u64,
    misses: u64,
    inserts: u64,
}

/// Point-in-time counters, for status output and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
}

pub struct CompatibilityCache {
    tree: Tree,
    stats: Arc<RwLock<CacheStats>>,
}

impl CompatibilityCache {
    pub fn new(store: &DocumentStore) -> anyhow::Result<Self> {
        Ok(Self {
            tree: store.tree(COMPATIBILITY_CACHE_TREE)?,
            stats: Arc::new(RwLock::new(CacheStats::default())),
        })
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        let stats = self.stats.read();
        CacheStatsSnapshot {
            hits: stats.hits,
            misses: stats.misses,
            inserts: stats.inserts,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn lookup(&self, key: &str) -> Option<CompatibilityResult> {
        match self.tree.get(key.as_bytes()) {
            Ok(Some(bytes)) => match serde_json::from_slice::<CompatibilityResult>(&bytes) {
                Ok(result) => {
                    self.stats.write().hits += 1;
                    debug!("Cache hit for key '{key}'");
                    Some(result)
                }
                Err(e) => {
                    // A document we can no longer read counts as a miss
                    warn!("Discarding unreadable cache document '{key}': {e}");
                    self.stats.write().misses += 1;
                    None
                }
            },
            _ => {
                self.stats.write().misses += 1;
                None
            }
        }
    }

    fn store(&self, key: &str, result: &CompatibilityResult) -> DomainResult<()> {
        let bytes = serde_json::to_vec(result)
            .map_err(|e| DomainError::Storage(format!("cache serialization failed: {e}")))?;
        self.tree
            .insert(key.as_bytes(), bytes)
            .map_err(|e| DomainError::Storage(format!("cache write failed: {e}")))?;
        self.stats.write().inserts += 1;
        debug!("Cached result for key '{key}'");
        Ok(())
    }
}

#[async_trait]
impl CompatibilityCacheRepository for CompatibilityCache {
    async fn get(&self, key: &str) -> DomainResult<Option<CompatibilityResult>> {
        Ok(self.lookup(key))
    }

    async fn put(&self, key: &str, result: &CompatibilityResult) -> DomainResult<()> {
        self.store(key, result)
    }

    async fn clear(&self) -> DomainResult<()> {
        self.tree
            .clear()
            .map_err(|e| DomainError::Storage(format!("cache clear failed: {e}")))?;
        Ok(())
    }
}
