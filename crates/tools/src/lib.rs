//! Tool system for the compatibility pipeline
//!
//! A tool is a narrow, schema-typed function the orchestrator may
//! invoke mid-reasoning. Tools report lookup failure as data
//! (`found: false` in their JSON result), never as `Err` - the error
//! channel is reserved for malformed invocations.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod catalog_ops;
pub mod vehicle_ops;

pub use catalog_ops::{CatalogHit, CatalogSearch};
pub use vehicle_ops::VehicleLookup;

/// Tool names as registered in the default registry
pub const VEHICLE_LOOKUP: &str = "vehicle_lookup";
pub const CATALOG_SEARCH: &str = "catalog_search";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    pub command: String,
    pub args: HashMap<String, String>,
    pub context: Option<String>,
}

impl ToolInput {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            args: HashMap::new(),
            context: None,
        }
    }

    pub fn arg(mut self, key: &str, value: &str) -> Self {
        self.args.insert(key.to_string(), value.to_string());
        self
    }

    pub fn context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    /// JSON document conforming to the tool's output schema
    pub result: String,
    pub formatted_output: Option<String>,
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub examples: Vec<String>,
    pub input_schema: String,
}

/// Trait implemented by every tool
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn spec(&self) -> ToolSpec;
    async fn execute(&self, input: ToolInput) -> Result<ToolOutput>;
}

/// Tool registry - the dispatch table handed to the orchestrator
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with the stock compatibility tools
    pub fn new() -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };
        registry.register(VEHICLE_LOOKUP, Box::new(vehicle_ops::VehicleLookup::new()));
        registry.register(CATALOG_SEARCH, Box::new(catalog_ops::CatalogSearch::new()));
        registry
    }

    /// Registry with no tools; callers register their own
    pub fn empty() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, tool: Box<dyn Tool>) {
        self.tools.insert(name.to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn list_tools(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = ToolRegistry::new();
        assert!(registry.get(VEHICLE_LOOKUP).is_some());
        assert!(registry.get(CATALOG_SEARCH).is_some());
        assert!(registry.get("web_search").is_none());
        assert_eq!(registry.list_tools().len(), 2);
    }

    #[test]
    fn test_tool_input_builder() {
        let input = ToolInput::new(VEHICLE_LOOKUP)
            .arg("licensePlate", "ABC1234")
            .context("compatibility lookup");
        assert_eq!(input.command, VEHICLE_LOOKUP);
        assert_eq!(input.args.get("licensePlate").map(String::as_str), Some("ABC1234"));
    }
}
