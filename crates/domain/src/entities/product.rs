//! Product - core inventory entity
//!
//! A catalog item held in stock by one store (group). Quantity changes
//! only through stock movements; the group id is fixed at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::MovementKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    /// SKU doubles as the fitment list in the source catalog
    /// (e.g. "Scania R440; Scania R500")
    sku: String,
    category: String,
    quantity: u32,
    reorder_level: u32,
    location: String,
    price: f64,
    group_id: String,
}

impl Product {
    /// Create a new product with business validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        reorder_level: u32,
        location: impl Into<String>,
        price: f64,
        group_id: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProductName);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            sku: sku.into(),
            category: category.into(),
            quantity,
            reorder_level,
            location: location.into(),
            price,
            group_id: group_id.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Update the editable details. The group id never changes after
    /// creation and the quantity only moves through `apply_movement`.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        reorder_level: u32,
        location: impl Into<String>,
        price: f64,
    ) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProductName);
        }
        self.name = name;
        self.sku = sku.into();
        self.category = category.into();
        self.reorder_level = reorder_level;
        self.location = location.into();
        self.price = price;
        Ok(())
    }

    /// Apply a stock movement to this product's quantity.
    ///
    /// An exit larger than the current stock is a business rule
    /// violation and leaves the product untouched.
    pub fn apply_movement(&mut self, kind: MovementKind, amount: u32) -> DomainResult<()> {
        if amount == 0 {
            return Err(DomainError::ZeroQuantityMovement);
        }
        match kind.apply(self.quantity, amount) {
            Some(updated) => {
                self.quantity = updated;
                Ok(())
            }
            None => Err(DomainError::InsufficientStock {
                product: self.name.clone(),
                requested: amount,
                available: self.quantity,
            }),
        }
    }

    /// A product at or below its reorder level needs replenishment
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Estimated value of the stock on hand
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
