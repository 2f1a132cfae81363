//! UserRepository - persistence contract for user profiles

use crate::entities::UserProfile;
use crate::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, profile: &UserProfile) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>>;

    /// All profiles belonging to a group
    async fn find_by_group(&self, group_id: &str) -> DomainResult<Vec<UserProfile>>;

    async fn find_all(&self) -> DomainResult<Vec<UserProfile>>;
}
