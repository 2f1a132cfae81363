//! Domain layer for Stock Master
//!
//! Entities, value objects and repository contracts for the inventory
//! system and the parts-compatibility pipeline. No infrastructure
//! concerns live here: persistence, HTTP and LLM access are behind the
//! repository traits.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{Group, Product, StockMovement, UserProfile};
pub use errors::{DomainError, DomainResult, ErrorCategory};
pub use repositories::{
    CompatibilityCacheRepository, GroupRepository, MovementRepository, ProductRepository,
    UserRepository,
};
pub use value_objects::{
    CompatibilityResult, MovementKind, Part, ResultSource, SalesRecord, ServiceLevel, UserRole,
    VehicleDetails,
};
