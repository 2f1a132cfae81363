//! ServiceLevel - desired percentage of demand met from stock

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Desired service level for reorder planning, as a percentage.
///
/// Enforces the business range 80..=99: below 80 the plan is useless,
/// 100 would require infinite stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceLevel(u8);

impl ServiceLevel {
    /// Create new service level with business validation
    pub fn new(value: u8) -> DomainResult<Self> {
        if !(80..=99).contains(&value) {
            return Err(DomainError::InvalidServiceLevel(value));
        }
        Ok(Self(value))
    }

    /// Get the percentage value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ServiceLevel {
    fn default() -> Self {
        Self(95)
    }
}

impl std::fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
