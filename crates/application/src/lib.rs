//! Application services for Stock Master
//!
//! Orchestrates the domain entities over the repository contracts:
//! inventory CRUD and stock movements, admin over users and groups,
//! dashboard analytics, HTML report export and catalog seeding.

pub mod admin_service;
pub mod analytics;
pub mod inventory_service;
pub mod reports;
pub mod seed;

pub use admin_service::AdminService;
pub use analytics::{dashboard_stats, recent_movements, stock_by_category, CategoryTotal, DashboardStats};
pub use inventory_service::{InventoryService, NewProduct, ProductUpdate};
