//! MovementRepository - persistence contract for stock movements

use crate::entities::StockMovement;
use crate::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait MovementRepository: Send + Sync {
    /// Append a movement record (movements are never edited)
    async fn append(&self, movement: &StockMovement) -> DomainResult<()>;

    /// All movements of one group, newest first
    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<StockMovement>>;

    /// Movements of one product, newest first
    async fn find_by_product(
        &self,
        group_id: &str,
        product_id: &str,
    ) -> DomainResult<Vec<StockMovement>>;
}
