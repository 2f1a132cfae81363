//! AI-assisted flows
//!
//! Two request-scoped pipelines: the compatibility lookup (cache-first,
//! tool-augmented, with an open-ended fallback) and the reorder
//! planner (pure structured-output reasoning).

pub mod compatibility;
pub mod reorder;

pub use compatibility::CompatibilityFlow;
pub use reorder::{InventoryLevel, ReorderItem, ReorderPlan, ReorderPlanFlow, ReorderPlanOutput};
