//! Sled-backed persistence for Stock Master
//!
//! One embedded document database; each collection is a sled tree and
//! every value is a JSON document, so the on-disk layout mirrors the
//! collections the application reads and writes.

mod compatibility_cache;
mod document_store;
mod repositories;

pub use compatibility_cache::{CacheStatsSnapshot, CompatibilityCache};
pub use document_store::DocumentStore;
pub use repositories::{
    SledGroupRepository, SledMovementRepository, SledProductRepository, SledUserRepository,
};
