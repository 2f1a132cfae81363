//! Reorder plan generation
//!
//! Hands sales figures and current stock to the reasoning backend and
//! asks for an optimized replenishment plan. The plan field of the
//! model output is parsed leniently: a well-formed item list when the
//! model cooperates, the raw text otherwise.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use domain::value_objects::{SalesRecord, ServiceLevel};
use llm::{parse_structured, CompletionRequest, LlmClient};

/// Current stock of one product, as handed to the planner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLevel {
    pub product_id: String,
    pub product_name: String,
    pub quantity_in_stock: u32,
}

/// One line of a parsed reorder plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: u32,
}

/// A reorder plan, as well-formed as the model made it
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderPlan {
    Items(Vec<ReorderItem>),
    /// The model answered with something we could not parse as items;
    /// preserved verbatim for the operator
    Raw(String),
}

#[derive(Debug, Clone)]
pub struct ReorderPlanOutput {
    pub plan: ReorderPlan,
    pub rationale: String,
}

/// Raw structured output as the model emits it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReorderPlanRaw {
    reorder_plan: serde_json::Value,
    #[serde(default)]
    rationale: String,
}

pub struct ReorderPlanFlow {
    llm: LlmClient,
}

impl ReorderPlanFlow {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn generate(
        &self,
        sales_data: &[SalesRecord],
        inventory_levels: &[InventoryLevel],
        desired_service_level: ServiceLevel,
    ) -> Result<ReorderPlanOutput> {
        let sales_json = serde_json::to_string(sales_data)?;
        let inventory_json = serde_json::to_string(inventory_levels)?;

        let prompt = format!(
            r#"You are an expert inventory management analyst. Analyze the provided sales data and inventory levels to generate an optimized reorder plan.

Sales Data: {sales_json}
Inventory Levels: {inventory_json}
Desired Service Level: {desired_service_level}

Consider the following factors when generating the reorder plan:
* Sales trends and seasonality
* Lead times for each product
* Storage capacity
* Cost of holding inventory

Answer ONLY in JSON format:
{{
    "reorderPlan": [
        {{"productId": "id", "productName": "name", "quantity": 0}}
    ],
    "rationale": "explanation of the reorder plan, including the factors considered and assumptions made"
}}

Ensure that the reorder plan minimizes stockouts while also avoiding excess inventory."#
        );

        info!(
            "Generating reorder plan for {} products at service level {desired_service_level}",
            inventory_levels.len()
        );

        let response = self
            .llm
            .complete(CompletionRequest::new(&prompt))
            .await
            .context("reasoning backend unavailable")?;

        let raw: ReorderPlanRaw =
            parse_structured(&response).context("reasoning backend returned malformed output")?;

        Ok(ReorderPlanOutput {
            plan: parse_plan(raw.reorder_plan),
            rationale: raw.rationale,
        })
    }
}

/// Lenient plan parsing: accept an item array directly, an item array
/// encoded as a JSON string, or fall back to the raw text.
fn parse_plan(value: serde_json::Value) -> ReorderPlan {
    match value {
        serde_json::Value::Array(_) => match serde_json::from_value(value.clone()) {
            Ok(items) => ReorderPlan::Items(items),
            Err(_) => ReorderPlan::Raw(value.to_string()),
        },
        serde_json::Value::String(text) => match serde_json::from_str(&text) {
            Ok(items) => ReorderPlan::Items(items),
            Err(_) => ReorderPlan::Raw(text),
        },
        other => ReorderPlan::Raw(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plan_from_array() {
        let plan = parse_plan(json!([
            {"productId": "p1", "productName": "Filtro de Óleo", "quantity": 4},
            {"productId": "p2", "quantity": 2}
        ]));
        match plan {
            ReorderPlan::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].quantity, 4);
                assert_eq!(items[1].product_name, None);
            }
            ReorderPlan::Raw(_) => panic!("expected parsed items"),
        }
    }

    #[test]
    fn test_parse_plan_from_embedded_string() {
        let plan = parse_plan(json!(r#"[{"productId": "p1", "quantity": 1}]"#));
        assert_eq!(
            plan,
            ReorderPlan::Items(vec![ReorderItem {
                product_id: "p1".to_string(),
                product_name: None,
                quantity: 1
            }])
        );
    }

    #[test]
    fn test_unparseable_plan_is_preserved() {
        let plan = parse_plan(json!("reorder 4 units of the oil filter"));
        assert_eq!(
            plan,
            ReorderPlan::Raw("reorder 4 units of the oil filter".to_string())
        );
    }
}
