//! UserProfile - an account scoped to one store group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::UserRole;

/// Profiles are never hard-deleted: removal deactivates the profile so
/// history keeps resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: String,
    username: String,
    role: UserRole,
    group_id: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        username: impl Into<String>,
        role: UserRole,
        group_id: impl Into<String>,
    ) -> DomainResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::InvalidUsername(
                "username cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            username,
            role,
            group_id: group_id.into(),
            is_active: true,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_starts_active() {
        let profile = UserProfile::new("maria", UserRole::Admin, "loja-1").expect("profile");
        assert!(profile.is_active());
        assert!(profile.role().is_admin());
    }

    #[test]
    fn test_blank_username_rejected() {
        assert!(UserProfile::new("   ", UserRole::User, "loja-1").is_err());
    }
}
