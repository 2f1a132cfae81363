//! StockMovement - immutable record of stock entering or leaving

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Product;
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::MovementKind;

/// One stock movement. Product name and SKU are denormalized into the
/// record so history stays readable after the product is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    id: String,
    product_id: String,
    product_name: String,
    sku: String,
    kind: MovementKind,
    quantity: u32,
    timestamp: DateTime<Utc>,
    notes: Option<String>,
    group_id: String,
}

impl StockMovement {
    pub fn record(
        product: &Product,
        kind: MovementKind,
        quantity: u32,
        notes: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::ZeroQuantityMovement);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            product_id: product.id().to_string(),
            product_name: product.name().to_string(),
            sku: product.sku().to_string(),
            kind,
            quantity,
            timestamp,
            notes,
            group_id: product.group_id().to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}
