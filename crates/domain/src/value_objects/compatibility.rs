//! Compatibility lookup values
//!
//! The wire layout (camelCase fields, lowercase source tags) matches the
//! documents persisted in the compatibility cache, so results round-trip
//! between the pipeline and the store without translation.

use serde::{Deserialize, Serialize};

/// A single compatible part. Immutable value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Descriptive name of the part
    pub part_name: String,
    /// Unique part number, code or SKU
    pub part_number: String,
    /// Manufacturer of the part
    pub manufacturer: String,
}

impl Part {
    pub fn new(
        part_name: impl Into<String>,
        part_number: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            part_name: part_name.into(),
            part_number: part_number.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

/// Vehicle record produced by the plate resolver.
///
/// Ephemeral - only used to chain the resolver output into a catalog
/// lookup. A failed resolution is expressed as `found: false`, never as
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl VehicleDetails {
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Which pipeline stage produced a result.
///
/// Derived by the pipeline, never client-supplied: `Cache` on a cache
/// hit, `Api` when a tool call returned usable data, `WebSearch` for the
/// open-ended fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Cache,
    Api,
    WebSearch,
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSource::Cache => write!(f, "cache"),
            ResultSource::Api => write!(f, "api"),
            ResultSource::WebSearch => write!(f, "web_search"),
        }
    }
}

/// Final output of the compatibility pipeline.
///
/// An empty `compatible_parts` list with an explanatory rationale is a
/// valid empty-success result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub compatible_parts: Vec<Part>,
    pub rationale: String,
    pub source: ResultSource,
}

impl CompatibilityResult {
    pub fn new(compatible_parts: Vec<Part>, rationale: impl Into<String>, source: ResultSource) -> Self {
        Self {
            compatible_parts,
            rationale: rationale.into(),
            source,
        }
    }

    /// Only non-empty results are worth caching
    pub fn is_cacheable(&self) -> bool {
        !self.compatible_parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_layout_is_camel_case() {
        let result = CompatibilityResult::new(
            vec![Part::new("Filtro de Óleo", "HU 945/2x", "MANN")],
            "catalog lookup",
            ResultSource::Api,
        );

        let json = serde_json::to_value(&result).expect("serializes");
        assert!(json.get("compatibleParts").is_some());
        assert_eq!(json["compatibleParts"][0]["partName"], "Filtro de Óleo");
        assert_eq!(json["compatibleParts"][0]["partNumber"], "HU 945/2x");
        assert_eq!(json["source"], "api");
    }

    #[test]
    fn test_source_tag_spelling() {
        assert_eq!(ResultSource::WebSearch.to_string(), "web_search");
        assert_eq!(
            serde_json::to_string(&ResultSource::WebSearch).expect("serializes"),
            "\"web_search\""
        );
    }

    #[test]
    fn test_empty_result_is_not_cacheable() {
        let empty = CompatibilityResult::new(vec![], "nothing found", ResultSource::WebSearch);
        assert!(!empty.is_cacheable());
    }
}
