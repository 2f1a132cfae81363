//! Sled implementations of the domain repository contracts
//!
//! Group-scoped collections (products, movements) use `{group_id}/{id}`
//! keys so a single prefix scan serves per-tenant listings.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Tree;

use domain::entities::{Group, Product, StockMovement, UserProfile};
use domain::errors::{DomainError, DomainResult};
use domain::repositories::{
    GroupRepository, MovementRepository, ProductRepository, UserRepository,
};

use crate::document_store::{
    scoped_key, DocumentStore, GROUPS_TREE, MOVEMENTS_TREE, PRODUCTS_TREE, USER_PROFILES_TREE,
};

fn storage_err(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(format!("{context}: {e}"))
}

fn encode<T: Serialize>(value: &T) -> DomainResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| storage_err("document serialization failed", e))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> DomainResult<T> {
    serde_json::from_slice(bytes).map_err(|e| storage_err("document deserialization failed", e))
}

fn scan_prefix<T: DeserializeOwned>(tree: &Tree, prefix: &str) -> DomainResult<Vec<T>> {
    let mut items = Vec::new();
    for entry in tree.scan_prefix(prefix.as_bytes()) {
        let (_, bytes) = entry.map_err(|e| storage_err("collection scan failed", e))?;
        items.push(decode(&bytes)?);
    }
    Ok(items)
}

fn scan_all<T: DeserializeOwned>(tree: &Tree) -> DomainResult<Vec<T>> {
    let mut items = Vec::new();
    for entry in tree.iter() {
        let (_, bytes) = entry.map_err(|e| storage_err("collection scan failed", e))?;
        items.push(decode(&bytes)?);
    }
    Ok(items)
}

// --- Products ---

pub struct SledProductRepository {
    tree: Tree,
}

impl SledProductRepository {
    pub fn new(store: &DocumentStore) -> anyhow::Result<Self> {
        Ok(Self {
            tree: store.tree(PRODUCTS_TREE)?,
        })
    }
}

#[async_trait]
impl ProductRepository for SledProductRepository {
    async fn save(&self, product: &Product) -> DomainResult<()> {
        let key = scoped_key(product.group_id(), product.id());
        self.tree
            .insert(key.as_bytes(), encode(product)?)
            .map_err(|e| storage_err("product write failed", e))?;
        Ok(())
    }

    async fn find_by_id(&self, group_id: &str, id: &str) -> DomainResult<Option<Product>> {
        let key = scoped_key(group_id, id);
        match self
            .tree
            .get(key.as_bytes())
            .map_err(|e| storage_err("product read failed", e))?
        {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = scan_prefix(&self.tree, &format!("{group_id}/"))?;
        products.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(products)
    }

    async fn delete(&self, group_id: &str, id: &str) -> DomainResult<bool> {
        let key = scoped_key(group_id, id);
        let removed = self
            .tree
            .remove(key.as_bytes())
            .map_err(|e| storage_err("product delete failed", e))?;
        Ok(removed.is_some())
    }

    async fn count_by_group(&self, group_id: &str) -> DomainResult<usize> {
        Ok(self
            .tree
            .scan_prefix(format!("{group_id}/").as_bytes())
            .count())
    }
}

// --- Stock movements ---

pub struct SledMovementRepository {
    tree: Tree,
}

impl SledMovementRepository {
    pub fn new(store: &DocumentStore) -> anyhow::Result<Self> {
        Ok(Self {
            tree: store.tree(MOVEMENTS_TREE)?,
        })
    }
}

#[async_trait]
impl MovementRepository for SledMovementRepository {
    async fn append(&self, movement: &StockMovement) -> DomainResult<()> {
        let key = scoped_key(movement.group_id(), movement.id());
        self.tree
            .insert(key.as_bytes(), encode(movement)?)
            .map_err(|e| storage_err("movement write failed", e))?;
        Ok(())
    }

    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<StockMovement>> {
        let mut movements: Vec<StockMovement> = scan_prefix(&self.tree, &format!("{group_id}/"))?;
        movements.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(movements)
    }

    async fn find_by_product(
        &self,
        group_id: &str,
        product_id: &str,
    ) -> DomainResult<Vec<StockMovement>> {
        let mut movements = self.find_by_group(group_id).await?;
        movements.retain(|m| m.product_id() == product_id);
        Ok(movements)
    }
}

// --- User profiles ---

pub struct SledUserRepository {
    tree: Tree,
}

impl SledUserRepository {
    pub fn new(store: &DocumentStore) -> anyhow::Result<Self> {
        Ok(Self {
            tree: store.tree(USER_PROFILES_TREE)?,
        })
    }
}

#[async_trait]
impl UserRepository for SledUserRepository {
    async fn save(&self, profile: &UserProfile) -> DomainResult<()> {
        self.tree
            .insert(profile.id().as_bytes(), encode(profile)?)
            .map_err(|e| storage_err("profile write failed", e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        match self
            .tree
            .get(id.as_bytes())
            .map_err(|e| storage_err("profile read failed", e))?
        {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<UserProfile>> {
        let mut profiles: Vec<UserProfile> = scan_all(&self.tree)?;
        profiles.retain(|p| p.group_id() == group_id);
        Ok(profiles)
    }

    async fn find_all(&self) -> DomainResult<Vec<UserProfile>> {
        scan_all(&self.tree)
    }
}

// --- Groups ---

pub struct SledGroupRepository {
    tree: Tree,
}

impl SledGroupRepository {
    pub fn new(store: &DocumentStore) -> anyhow::Result<Self> {
        Ok(Self {
            tree: store.tree(GROUPS_TREE)?,
        })
    }
}

#[async_trait]
impl GroupRepository for SledGroupRepository {
    async fn save(&self, group: &Group) -> DomainResult<()> {
        self.tree
            .insert(group.id().as_bytes(), encode(group)?)
            .map_err(|e| storage_err("group write failed", e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Group>> {
        match self
            .tree
            .get(id.as_bytes())
            .map_err(|e| storage_err("group read failed", e))?
        {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<Group>> {
        scan_all(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::MovementKind;

    fn open_store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DocumentStore::open(dir.path().join("db")).expect("open");
        (dir, store)
    }

    fn product(name: &str, group: &str) -> Product {
        Product::new(name, "VW 24.250", "Filtro de Óleo", 2, 1, "A31", 85.5, group)
            .expect("valid product")
    }

    #[tokio::test]
    async fn test_products_scoped_by_group() {
        let (_dir, store) = open_store();
        let repo = SledProductRepository::new(&store).expect("repo");

        let a = product("Filtro A", "loja-1");
        let b = product("Filtro B", "loja-2");
        repo.save(&a).await.expect("save");
        repo.save(&b).await.expect("save");

        let loja1 = repo.find_by_group("loja-1").await.expect("list");
        assert_eq!(loja1.len(), 1);
        assert_eq!(loja1[0].name(), "Filtro A");
        assert_eq!(repo.count_by_group("loja-2").await.expect("count"), 1);

        assert!(repo.find_by_id("loja-2", b.id()).await.expect("get").is_some());
        assert!(repo.find_by_id("loja-1", b.id()).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let (_dir, store) = open_store();
        let repo = SledProductRepository::new(&store).expect("repo");
        let p = product("Filtro A", "loja-1");
        repo.save(&p).await.expect("save");

        assert!(repo.delete("loja-1", p.id()).await.expect("delete"));
        assert!(!repo.delete("loja-1", p.id()).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_movements_newest_first() {
        let (_dir, store) = open_store();
        let repo = SledMovementRepository::new(&store).expect("repo");
        let p = product("Filtro A", "loja-1");

        let older = chrono::Utc::now() - chrono::Duration::hours(1);
        let newer = chrono::Utc::now();
        let first = StockMovement::record(&p, MovementKind::Entry, 2, None, older).expect("mv");
        let second = StockMovement::record(&p, MovementKind::Exit, 1, None, newer).expect("mv");
        repo.append(&first).await.expect("append");
        repo.append(&second).await.expect("append");

        let listed = repo.find_by_group("loja-1").await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), second.id());
        assert_eq!(listed[1].id(), first.id());
    }
}
