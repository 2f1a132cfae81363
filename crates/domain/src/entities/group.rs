//! Group - a tenant (store) owning products, movements and users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    id: String,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidGroupName(
                "group name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            description: description.into(),
            is_active: true,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
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
    fn test_blank_name_rejected() {
        assert!(Group::new("", "desc").is_err());
    }

    #[test]
    fn test_activation_toggles() {
        let mut group = Group::new("Loja Matriz", "Loja principal").expect("group");
        assert!(group.is_active());
        group.deactivate();
        assert!(!group.is_active());
        group.activate();
        assert!(group.is_active());
    }
}
