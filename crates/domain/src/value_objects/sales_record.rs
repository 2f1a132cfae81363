//! SalesRecord - units sold per product over a period

use serde::{Deserialize, Serialize};

/// Sales figure for one product, fed into the reorder planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub product_id: String,
    pub product_name: String,
    pub units_sold: u32,
}
