//! DocumentStore - the embedded database behind every repository

use anyhow::{Context, Result};
use sled::{Config, Db, Tree};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Collection names; one sled tree per collection
pub const PRODUCTS_TREE: &str = "products";
pub const MOVEMENTS_TREE: &str = "stock_movements";
pub const USER_PROFILES_TREE: &str = "user_profiles";
pub const GROUPS_TREE: &str = "groups";
pub const COMPATIBILITY_CACHE_TREE: &str = "compatibility_cache";

/// Handle to the embedded database.
///
/// Constructed once at process start and passed into the repositories -
/// never a hidden global.
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Db>,
}

impl DocumentStore {
    /// Open (or create) the database under `path` with crash recovery.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let config = Config::new()
            .path(path)
            .mode(sled::Mode::HighThroughput)
            .flush_every_ms(Some(2000))
            .use_compression(true);

        let db = config.open().context("Failed to open document store")?;
        info!("Document store opened at {:?}", path);

        Ok(Self { db: Arc::new(db) })
    }

    /// Open a named collection
    pub fn tree(&self, name: &str) -> Result<Tree> {
        self.db
            .open_tree(name)
            .with_context(|| format!("Failed to open collection '{name}'"))
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush().context("Failed to flush document store")?;
        Ok(())
    }
}

/// Composite key `{group_id}/{id}` so one prefix scan lists a group's
/// documents without touching other tenants.
pub fn scoped_key(group_id: &str, id: &str) -> String {
    format!("{group_id}/{id}")
}
