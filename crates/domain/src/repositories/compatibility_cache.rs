//! CompatibilityCacheRepository - cache contract for the lookup pipeline
//!
//! A point lookup keyed by the normalized query string. No fuzzy
//! matching, no TTL, last-write-wins on put.

use crate::errors::DomainResult;
use crate::value_objects::CompatibilityResult;
use async_trait::async_trait;

#[async_trait]
pub trait CompatibilityCacheRepository: Send + Sync {
    /// Exact lookup by normalized query key
    async fn get(&self, key: &str) -> DomainResult<Option<CompatibilityResult>>;

    /// Unconditional overwrite; callers decide what is worth caching
    async fn put(&self, key: &str, result: &CompatibilityResult) -> DomainResult<()>;

    /// Drop every cached result (operator action - there is no automatic
    /// expiry)
    async fn clear(&self) -> DomainResult<()>;
}
