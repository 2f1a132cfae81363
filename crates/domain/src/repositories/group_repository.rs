//! GroupRepository - persistence contract for store groups

use crate::entities::Group;
use crate::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn save(&self, group: &Group) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Group>>;

    async fn find_all(&self) -> DomainResult<Vec<Group>>;
}
