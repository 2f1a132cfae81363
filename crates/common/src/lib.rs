pub mod input_validation;
pub mod structured_logging;

pub use input_validation::{validate_search_query, MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};
pub use structured_logging::{init_structured_logging, LoggingConfig};
