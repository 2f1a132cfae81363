//! Compatibility lookup pipeline
//!
//! Cache-first, tool-augmented search for parts compatible with a
//! vehicle, identified by license plate or model string:
//!
//! cache -> [vehicle_lookup ->] catalog_search -> knowledge fallback
//!
//! Tool failures are absorbed into negative results so the pipeline
//! always reaches its fallback; only a reasoning-backend failure
//! surfaces to the caller. Results with at least one part are written
//! back to the cache under the normalized query.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::input_validation::validate_search_query;
use domain::repositories::CompatibilityCacheRepository;
use domain::value_objects::{CompatibilityResult, Part, ResultSource, VehicleDetails};
use llm::{parse_structured, CompletionRequest, LlmClient};
use tools::{CatalogHit, ToolInput, ToolRegistry, CATALOG_SEARCH, VEHICLE_LOOKUP};

/// How the query was classified before tool dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryKind {
    LicensePlate,
    VehicleModel,
}

/// Fallback answer synthesized by the reasoning backend
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeFindings {
    #[serde(default)]
    compatible_parts: Vec<Part>,
    #[serde(default)]
    rationale: String,
}

pub struct CompatibilityFlow {
    cache: Arc<dyn CompatibilityCacheRepository>,
    registry: ToolRegistry,
    llm: LlmClient,
}

impl CompatibilityFlow {
    pub fn new(cache: Arc<dyn CompatibilityCacheRepository>, llm: LlmClient) -> Self {
        Self::with_registry(cache, ToolRegistry::new(), llm)
    }

    /// Construct with a caller-supplied tool registry
    pub fn with_registry(
        cache: Arc<dyn CompatibilityCacheRepository>,
        registry: ToolRegistry,
        llm: LlmClient,
    ) -> Self {
        Self {
            cache,
            registry,
            llm,
        }
    }

    /// Find parts compatible with the vehicle described by `query`.
    ///
    /// Returns an empty result with an explanatory rationale when every
    /// stage comes up dry - that is a valid answer, not an error.
    pub async fn find_compatible_parts(&self, query: &str) -> Result<CompatibilityResult> {
        let query = validate_search_query(query).map_err(|e| anyhow!(e))?;
        let cache_key = normalize_cache_key(query);

        if let Some(mut cached) = self
            .cache
            .get(&cache_key)
            .await
            .context("compatibility cache lookup failed")?
        {
            info!("Returning result from compatibility cache");
            cached.source = ResultSource::Cache;
            return Ok(cached);
        }

        let result = match self.run_tools(query).await {
            Some(result) => result,
            None => self.knowledge_fallback(query).await?,
        };

        self.maybe_cache(&cache_key, &result).await?;
        Ok(result)
    }

    /// Deterministic tool chain. `None` means no tool produced usable
    /// parts and the fallback should run.
    async fn run_tools(&self, query: &str) -> Option<CompatibilityResult> {
        let (model_query, resolved) = match classify_query(query) {
            QueryKind::LicensePlate => {
                let details = self.invoke_vehicle_lookup(query).await;
                let model_query = match (details.model.as_deref(), details.year) {
                    (Some(model), Some(year)) => format!("{model} {year}"),
                    _ => {
                        debug!("Plate '{query}' did not resolve; skipping catalog lookup");
                        return None;
                    }
                };
                (model_query, Some(details))
            }
            QueryKind::VehicleModel => (query.to_string(), None),
        };

        let hit = self.invoke_catalog_search(&model_query).await;
        let parts = hit.parts.unwrap_or_default();
        if !hit.found || parts.is_empty() {
            return None;
        }

        let rationale = match &resolved {
            Some(details) => format!(
                "License plate {query} resolved to {} ({}, engine {}); the parts catalog returned {} compatible parts.",
                details.model.as_deref().unwrap_or("unknown model"),
                details.year.map(|y| y.to_string()).unwrap_or_default(),
                details.engine.as_deref().unwrap_or("unknown"),
                parts.len()
            ),
            None => format!(
                "The parts catalog returned {} compatible parts for model '{query}'.",
                parts.len()
            ),
        };

        Some(CompatibilityResult::new(parts, rationale, ResultSource::Api))
    }

    async fn invoke_vehicle_lookup(&self, plate: &str) -> VehicleDetails {
        let Some(tool) = self.registry.get(VEHICLE_LOOKUP) else {
            warn!("vehicle_lookup tool is not registered");
            return VehicleDetails::not_found();
        };

        let input = ToolInput::new(VEHICLE_LOOKUP)
            .arg("licensePlate", plate)
            .context("compatibility lookup");

        match tool.execute(input).await {
            Ok(output) => serde_json::from_str(&output.result).unwrap_or_else(|e| {
                warn!("vehicle_lookup returned an unreadable result: {e}");
                VehicleDetails::not_found()
            }),
            Err(e) => {
                // Tool failure is recovered locally; the pipeline moves on
                warn!("vehicle_lookup failed: {e}");
                VehicleDetails::not_found()
            }
        }
    }

    async fn invoke_catalog_search(&self, vehicle_model: &str) -> CatalogHit {
        let Some(tool) = self.registry.get(CATALOG_SEARCH) else {
            warn!("catalog_search tool is not registered");
            return CatalogHit::default();
        };

        let input = ToolInput::new(CATALOG_SEARCH)
            .arg("vehicleModel", vehicle_model)
            .context("compatibility lookup");

        match tool.execute(input).await {
            Ok(output) => serde_json::from_str(&output.result).unwrap_or_else(|e| {
                warn!("catalog_search returned an unreadable result: {e}");
                CatalogHit::default()
            }),
            Err(e) => {
                warn!("catalog_search failed: {e}");
                CatalogHit::default()
            }
        }
    }

    /// Open-ended reasoning step once the tools are exhausted
    async fn knowledge_fallback(&self, query: &str) -> Result<CompatibilityResult> {
        info!("Tools found nothing for '{query}', falling back to open-ended search");

        let prompt = format!(
            r#"A customer is asking for compatible parts for a truck: "{query}".
The vehicle registry and the parts catalog found nothing for this query.
Search your knowledge for parts compatible with "{query}".

Answer ONLY in JSON format:
{{
    "compatibleParts": [
        {{"partName": "descriptive part name", "partNumber": "part number or SKU", "manufacturer": "manufacturer"}}
    ],
    "rationale": "explanation of how the result was obtained, including any assumptions made"
}}

If you cannot find anything, return an empty "compatibleParts" list and explain why in the rationale."#
        );

        let response = self
            .llm
            .complete(CompletionRequest::new(&prompt))
            .await
            .context("reasoning backend unavailable")?;

        let findings: KnowledgeFindings =
            parse_structured(&response).context("reasoning backend returned malformed output")?;

        let rationale = if findings.rationale.is_empty() {
            format!("Open-ended search for '{query}' produced no explanation.")
        } else {
            findings.rationale
        };

        Ok(CompatibilityResult::new(
            findings.compatible_parts,
            rationale,
            ResultSource::WebSearch,
        ))
    }

    /// Persist a result worth keeping; empty results always re-resolve
    async fn maybe_cache(&self, cache_key: &str, result: &CompatibilityResult) -> Result<()> {
        if !result.is_cacheable() {
            debug!("Skipping cache write for empty result '{cache_key}'");
            return Ok(());
        }
        self.cache
            .put(cache_key, result)
            .await
            .context("compatibility cache write failed")?;
        info!("Result saved to compatibility cache");
        Ok(())
    }
}

/// Cache keys are a pure function of the query text
fn normalize_cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Explicit plate-vs-model rule: a single alphanumeric token of plate
/// length mixing letters and digits reads as a license plate, anything
/// else as a model string. Hyphens are ignored ("ABC-1234").
fn classify_query(query: &str) -> QueryKind {
    let compact: String = query.chars().filter(|c| *c != '-').collect();
    let is_plate = (5..=8).contains(&compact.len())
        && compact.chars().all(|c| c.is_ascii_alphanumeric())
        && compact.chars().any(|c| c.is_ascii_alphabetic())
        && compact.chars().any(|c| c.is_ascii_digit());

    if is_plate {
        QueryKind::LicensePlate
    } else {
        QueryKind::VehicleModel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plates() {
        assert_eq!(classify_query("ABC1234"), QueryKind::LicensePlate);
        assert_eq!(classify_query("XYZ0000"), QueryKind::LicensePlate);
        assert_eq!(classify_query("ABC-1234"), QueryKind::LicensePlate);
    }

    #[test]
    fn test_classify_models() {
        assert_eq!(classify_query("Scania R450"), QueryKind::VehicleModel);
        assert_eq!(classify_query("VW 24.250"), QueryKind::VehicleModel);
        assert_eq!(classify_query("R450"), QueryKind::VehicleModel);
        assert_eq!(classify_query("Atego"), QueryKind::VehicleModel);
    }

    #[test]
    fn test_cache_key_normalization() {
        assert_eq!(normalize_cache_key("  Scania R450 "), "scania r450");
        assert_eq!(
            normalize_cache_key("ABC1234"),
            normalize_cache_key("abc1234")
        );
    }
}
