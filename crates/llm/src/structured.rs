//! Structured-output parsing for LLM responses
//!
//! Models are asked to answer in JSON but routinely wrap it in prose or
//! markdown fences. The extractor takes the outermost `{...}` block and
//! repairs the usual formatting slips before deserializing into the
//! declared schema type.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

/// Parse a schema-typed value out of a free-form model response.
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T> {
    let cleaned_response = response.trim();

    if let Some(json_start) = cleaned_response.find('{') {
        if let Some(json_end) = cleaned_response.rfind('}') {
            let json_str = &cleaned_response[json_start..=json_end];

            match serde_json::from_str::<T>(json_str) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let fixed_json = fix_json_format(json_str);
                    return serde_json::from_str(&fixed_json)
                        .map_err(|_| anyhow!("Failed to parse structured response: {e}"));
                }
            }
        }
    }

    Err(anyhow!("No valid JSON found in response: {response}"))
}

/// Repair common JSON mistakes produced by models
fn fix_json_format(json_str: &str) -> String {
    json_str
        .replace('\'', "\"")
        .replace("True", "true")
        .replace("False", "false")
        .replace(",}", "}")
        .replace(",]", "]")
}
