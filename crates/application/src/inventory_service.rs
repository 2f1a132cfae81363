//! InventoryService - product CRUD and stock movements
//!
//! Every operation is scoped to one group (store). Quantity changes go
//! through `record_movement`, which updates the product and appends the
//! movement record together.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use domain::entities::{Product, StockMovement};
use domain::errors::{DomainError, DomainResult};
use domain::repositories::{MovementRepository, ProductRepository};
use domain::value_objects::MovementKind;

use crate::seed;

/// Input for product creation
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub reorder_level: u32,
    pub location: String,
    pub price: f64,
}

/// Editable product fields; group id and quantity stay out on purpose
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub reorder_level: u32,
    pub location: String,
    pub price: f64,
}

pub struct InventoryService {
    products: Arc<dyn ProductRepository>,
    movements: Arc<dyn MovementRepository>,
}

impl InventoryService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        movements: Arc<dyn MovementRepository>,
    ) -> Self {
        Self {
            products,
            movements,
        }
    }

    pub async fn add_product(&self, group_id: &str, input: NewProduct) -> DomainResult<Product> {
        let product = Product::new(
            input.name,
            input.sku,
            input.category,
            input.quantity,
            input.reorder_level,
            input.location,
            input.price,
            group_id,
        )?;
        self.products.save(&product).await?;
        info!("Product '{}' added to group {group_id}", product.name());
        Ok(product)
    }

    pub async fn edit_product(
        &self,
        group_id: &str,
        product_id: &str,
        update: ProductUpdate,
    ) -> DomainResult<Product> {
        let mut product = self.require_product(group_id, product_id).await?;
        product.update_details(
            update.name,
            update.sku,
            update.category,
            update.reorder_level,
            update.location,
            update.price,
        )?;
        self.products.save(&product).await?;
        Ok(product)
    }

    pub async fn delete_product(&self, group_id: &str, product_id: &str) -> DomainResult<()> {
        if !self.products.delete(group_id, product_id).await? {
            return Err(DomainError::ProductNotFound(product_id.to_string()));
        }
        info!("Product {product_id} removed from group {group_id}");
        Ok(())
    }

    pub async fn get_product(&self, group_id: &str, product_id: &str) -> DomainResult<Option<Product>> {
        self.products.find_by_id(group_id, product_id).await
    }

    pub async fn list_products(&self, group_id: &str) -> DomainResult<Vec<Product>> {
        self.products.find_by_group(group_id).await
    }

    /// Apply a stock movement: the product quantity and the movement
    /// record are written together. An exit beyond the available stock
    /// is rejected before anything is persisted.
    pub async fn record_movement(
        &self,
        group_id: &str,
        product_id: &str,
        kind: MovementKind,
        quantity: u32,
        notes: Option<String>,
    ) -> DomainResult<StockMovement> {
        let mut product = self.require_product(group_id, product_id).await?;
        product.apply_movement(kind, quantity)?;

        let movement = StockMovement::record(&product, kind, quantity, notes, Utc::now())?;
        self.products.save(&product).await?;
        self.movements.append(&movement).await?;

        info!(
            "{} of {} unit(s) of '{}' recorded",
            kind.label(),
            quantity,
            product.name()
        );
        Ok(movement)
    }

    pub async fn list_movements(&self, group_id: &str) -> DomainResult<Vec<StockMovement>> {
        self.movements.find_by_group(group_id).await
    }

    pub async fn movement_history(
        &self,
        group_id: &str,
        product_id: &str,
    ) -> DomainResult<Vec<StockMovement>> {
        self.movements.find_by_product(group_id, product_id).await
    }

    /// Seed the initial truck-filter catalog into an empty group.
    /// Returns the number of products created; 0 when the group already
    /// has data.
    pub async fn seed_initial_catalog(&self, group_id: &str) -> DomainResult<usize> {
        if self.products.count_by_group(group_id).await? > 0 {
            info!("Group {group_id} already has products, skipping seed");
            return Ok(0);
        }

        let catalog = seed::initial_catalog(group_id)?;
        let seeded = catalog.len();
        for product in &catalog {
            self.products.save(product).await?;
        }
        info!("Seeded {seeded} products into group {group_id}");
        Ok(seeded)
    }

    async fn require_product(&self, group_id: &str, product_id: &str) -> DomainResult<Product> {
        self.products
            .find_by_id(group_id, product_id)
            .await?
            .ok_or_else(|| DomainError::ProductNotFound(product_id.to_string()))
    }
}
