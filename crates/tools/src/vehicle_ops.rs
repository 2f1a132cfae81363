//! Vehicle registry lookup
//!
//! Resolves a license plate into model/year/engine. Stub behavior for
//! now; a production deployment would call an external registry API
//! such as 'Olho no Carro'. Whatever goes wrong, the tool answers
//! `found: false` so the pipeline can continue to its fallback.

use crate::{Tool, ToolInput, ToolOutput, ToolSpec, VEHICLE_LOOKUP};
use anyhow::{anyhow, Result};
use domain::value_objects::VehicleDetails;
use std::collections::HashMap;
use tracing::debug;

pub struct VehicleLookup;

impl VehicleLookup {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, license_plate: &str) -> VehicleDetails {
        debug!("Looking up vehicle for plate: {license_plate}");
        if license_plate.to_uppercase().contains("ABC") {
            return VehicleDetails {
                found: true,
                model: Some("Scania R450".to_string()),
                year: Some(2021),
                engine: Some("DC13 148".to_string()),
            };
        }
        VehicleDetails::not_found()
    }
}

impl Default for VehicleLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for VehicleLookup {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: VEHICLE_LOOKUP.to_string(),
            description:
                "Gets detailed vehicle information (exact model, year and engine) from a license plate"
                    .to_string(),
            usage: "vehicle_lookup <licensePlate>".to_string(),
            examples: vec!["vehicle_lookup ABC1234".to_string()],
            input_schema: r#"{"licensePlate": "string"}"#.to_string(),
        }
    }

    async fn execute(&self, input: ToolInput) -> Result<ToolOutput> {
        let plate = input
            .args
            .get("licensePlate")
            .ok_or_else(|| anyhow!("vehicle_lookup requires a 'licensePlate' argument"))?;

        let details = self.resolve(plate);
        let formatted = match (&details.model, details.year) {
            (Some(model), Some(year)) => format!("{model} ({year})"),
            _ => format!("No vehicle found for plate {plate}"),
        };

        Ok(ToolOutput {
            success: true,
            result: serde_json::to_string(&details)?,
            formatted_output: Some(formatted),
            metadata: HashMap::from([("found".to_string(), details.found.to_string())]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_plate_resolves() {
        let tool = VehicleLookup::new();
        let output = tool
            .execute(ToolInput::new(VEHICLE_LOOKUP).arg("licensePlate", "abc1234"))
            .await
            .expect("execute");

        let details: VehicleDetails = serde_json::from_str(&output.result).expect("schema");
        assert!(details.found);
        assert_eq!(details.model.as_deref(), Some("Scania R450"));
        assert_eq!(details.year, Some(2021));
        assert_eq!(details.engine.as_deref(), Some("DC13 148"));
    }

    #[tokio::test]
    async fn test_unknown_plate_reports_not_found() {
        let tool = VehicleLookup::new();
        let output = tool
            .execute(ToolInput::new(VEHICLE_LOOKUP).arg("licensePlate", "XYZ0000"))
            .await
            .expect("execute");

        assert!(output.success);
        let details: VehicleDetails = serde_json::from_str(&output.result).expect("schema");
        assert!(!details.found);
        assert!(details.model.is_none());
    }

    #[tokio::test]
    async fn test_missing_argument_is_invocation_error() {
        let tool = VehicleLookup::new();
        assert!(tool.execute(ToolInput::new(VEHICLE_LOOKUP)).await.is_err());
    }
}
