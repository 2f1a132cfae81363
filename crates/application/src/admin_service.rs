//! AdminService - user and group management
//!
//! Users and groups are never hard-deleted; removal deactivates them so
//! references from history keep resolving. Deactivating a group also
//! deactivates its users.

use std::sync::Arc;
use tracing::info;

use domain::entities::{Group, UserProfile};
use domain::errors::{DomainError, DomainResult};
use domain::repositories::{GroupRepository, UserRepository};
use domain::value_objects::UserRole;

pub struct AdminService {
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
}

impl AdminService {
    pub fn new(users: Arc<dyn UserRepository>, groups: Arc<dyn GroupRepository>) -> Self {
        Self { users, groups }
    }

    // --- Groups ---

    pub async fn create_group(&self, name: &str, description: &str) -> DomainResult<Group> {
        let group = Group::new(name, description)?;
        self.groups.save(&group).await?;
        info!("Group '{}' created", group.name());
        Ok(group)
    }

    pub async fn list_groups(&self) -> DomainResult<Vec<Group>> {
        self.groups.find_all().await
    }

    /// Toggle a group; deactivation cascades to its users.
    pub async fn set_group_active(&self, group_id: &str, active: bool) -> DomainResult<Group> {
        let mut group = self.require_group(group_id).await?;
        if active {
            group.activate();
        } else {
            group.deactivate();
        }
        self.groups.save(&group).await?;

        if !active {
            for mut profile in self.users.find_by_group(group_id).await? {
                profile.deactivate();
                self.users.save(&profile).await?;
            }
            info!("Group '{}' and its users deactivated", group.name());
        }
        Ok(group)
    }

    /// "Delete" a group: refused while active users remain, otherwise
    /// the group is deactivated.
    pub async fn delete_group(&self, group_id: &str) -> DomainResult<Group> {
        let group = self.require_group(group_id).await?;

        let has_active_users = self
            .users
            .find_by_group(group_id)
            .await?
            .iter()
            .any(|p| p.is_active());
        if has_active_users {
            return Err(DomainError::GroupHasActiveUsers(group.name().to_string()));
        }

        self.set_group_active(group_id, false).await
    }

    // --- Users ---

    pub async fn create_user(
        &self,
        username: &str,
        role: UserRole,
        group_id: &str,
    ) -> DomainResult<UserProfile> {
        // Users always belong to an existing group
        self.require_group(group_id).await?;

        let profile = UserProfile::new(username, role, group_id)?;
        self.users.save(&profile).await?;
        info!("User '{}' created in group {group_id}", profile.username());
        Ok(profile)
    }

    pub async fn list_users(&self, group_id: Option<&str>) -> DomainResult<Vec<UserProfile>> {
        match group_id {
            Some(group_id) => self.users.find_by_group(group_id).await,
            None => self.users.find_all().await,
        }
    }

    pub async fn set_user_active(&self, user_id: &str, active: bool) -> DomainResult<UserProfile> {
        let mut profile = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        if active {
            profile.activate();
        } else {
            profile.deactivate();
        }
        self.users.save(&profile).await?;
        Ok(profile)
    }

    /// "Delete" a user: the profile is deactivated, never removed.
    pub async fn delete_user(&self, user_id: &str) -> DomainResult<UserProfile> {
        self.set_user_active(user_id, false).await
    }

    async fn require_group(&self, group_id: &str) -> DomainResult<Group> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(group_id.to_string()))
    }
}
