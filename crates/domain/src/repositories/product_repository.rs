//! ProductRepository - persistence contract for products

use crate::entities::Product;
use crate::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product or overwrite an existing one
    async fn save(&self, product: &Product) -> DomainResult<()>;

    /// Retrieve product by ID within a group
    async fn find_by_id(&self, group_id: &str, id: &str) -> DomainResult<Option<Product>>;

    /// All products of one group
    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<Product>>;

    /// Delete product by ID, returns whether it existed
    async fn delete(&self, group_id: &str, id: &str) -> DomainResult<bool>;

    /// Number of products in a group
    async fn count_by_group(&self, group_id: &str) -> DomainResult<usize>;
}
