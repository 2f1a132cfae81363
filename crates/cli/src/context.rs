//! Process-wide application context
//!
//! Opens the document store once and wires the repositories into the
//! services. Constructed at startup and passed by reference into every
//! command handler.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use application::{AdminService, InventoryService};
use storage::{
    CompatibilityCache, DocumentStore, SledGroupRepository, SledMovementRepository,
    SledProductRepository, SledUserRepository,
};

pub struct AppContext {
    pub inventory: InventoryService,
    pub admin: AdminService,
    pub cache: Arc<CompatibilityCache>,
}

impl AppContext {
    pub fn open() -> Result<Self> {
        dotenv::dotenv().ok();

        let data_dir = std::env::var("STOCKMASTER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("stockmaster_data"));

        let store = DocumentStore::open(data_dir.join("db"))?;

        let inventory = InventoryService::new(
            Arc::new(SledProductRepository::new(&store)?),
            Arc::new(SledMovementRepository::new(&store)?),
        );
        let admin = AdminService::new(
            Arc::new(SledUserRepository::new(&store)?),
            Arc::new(SledGroupRepository::new(&store)?),
        );
        let cache = Arc::new(CompatibilityCache::new(&store)?);

        Ok(Self {
            inventory,
            admin,
            cache,
        })
    }
}
