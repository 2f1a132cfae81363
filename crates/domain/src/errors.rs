//! Domain errors - business rule violations

use thiserror::Error;

/// Domain-specific errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Business validation: product name cannot be empty
    #[error("Product name cannot be empty")]
    EmptyProductName,

    /// Business validation: quantity must be positive for a movement
    #[error("Movement quantity must be greater than zero")]
    ZeroQuantityMovement,

    /// Business rule: an exit cannot drive stock below zero
    #[error("Insufficient stock for '{product}': requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    /// Business validation: invalid search query
    #[error("Invalid search query: {0}")]
    InvalidSearchQuery(String),

    /// Business validation: service level must lie within 80..=99
    #[error("Invalid service level: {0}, must be between 80 and 99")]
    InvalidServiceLevel(u8),

    /// Business validation: username cannot be empty
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Business validation: group name cannot be empty
    #[error("Invalid group name: {0}")]
    InvalidGroupName(String),

    /// Business validation: product not found
    #[error("Product not found with ID: {0}")]
    ProductNotFound(String),

    /// Business validation: user not found
    #[error("User not found with ID: {0}")]
    UserNotFound(String),

    /// Business validation: group not found
    #[error("Group not found with ID: {0}")]
    GroupNotFound(String),

    /// Business rule: a group with active users cannot be removed
    #[error("Group '{0}' still has active users")]
    GroupHasActiveUsers(String),

    /// Infrastructure failure surfaced through a repository
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Check if error is a business validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyProductName
                | DomainError::ZeroQuantityMovement
                | DomainError::InvalidSearchQuery(_)
                | DomainError::InvalidServiceLevel(_)
                | DomainError::InvalidUsername(_)
                | DomainError::InvalidGroupName(_)
        )
    }

    /// Check if error is a business rule violation
    pub fn is_business_rule_error(&self) -> bool {
        matches!(
            self,
            DomainError::InsufficientStock { .. } | DomainError::GroupHasActiveUsers(_)
        )
    }

    /// Check if error indicates missing data
    pub fn is_not_found_error(&self) -> bool {
        matches!(
            self,
            DomainError::ProductNotFound(_)
                | DomainError::UserNotFound(_)
                | DomainError::GroupNotFound(_)
        )
    }

    /// Get error category for business logic
    pub fn category(&self) -> ErrorCategory {
        if self.is_validation_error() {
            ErrorCategory::Validation
        } else if self.is_business_rule_error() {
            ErrorCategory::BusinessRule
        } else if self.is_not_found_error() {
            ErrorCategory::NotFound
        } else {
            ErrorCategory::Other
        }
    }
}

/// Categories of domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input validation errors
    Validation,
    /// Business rule violations
    BusinessRule,
    /// Resource not found
    NotFound,
    /// Other domain errors
    Other,
}
