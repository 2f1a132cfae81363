//! Validation of user-supplied search input
//!
//! Rejects malformed queries before the pipeline runs, so validation
//! failures never reach the cache or the reasoning backend.

use thiserror::Error;

/// Shortest accepted compatibility query
pub const MIN_QUERY_LENGTH: usize = 3;

/// Longest accepted query; anything larger is junk or abuse
pub const MAX_QUERY_LENGTH: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    #[error("A consulta deve ter pelo menos {MIN_QUERY_LENGTH} caracteres.")]
    TooShort,
    #[error("A consulta deve ter no máximo {MAX_QUERY_LENGTH} caracteres.")]
    TooLong,
}

/// Validate a free-text compatibility query and return the trimmed text.
pub fn validate_search_query(query: &str) -> Result<&str, QueryValidationError> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LENGTH {
        return Err(QueryValidationError::TooShort);
    }
    if trimmed.chars().count() > MAX_QUERY_LENGTH {
        return Err(QueryValidationError::TooLong);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_rejected() {
        assert_eq!(validate_search_query("ab"), Err(QueryValidationError::TooShort));
        assert_eq!(validate_search_query("  a  "), Err(QueryValidationError::TooShort));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_search_query("  ABC1234  "), Ok("ABC1234"));
    }

    #[test]
    fn test_oversized_query_rejected() {
        let long = "x".repeat(MAX_QUERY_LENGTH + 1);
        assert_eq!(validate_search_query(&long), Err(QueryValidationError::TooLong));
    }
}
