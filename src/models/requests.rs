//! Request DTOs for the nutrition API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum accepted length of a search input, in characters
pub const MAX_SEARCH_INPUT_LENGTH: usize = 256;

/// Request body for a food search (POST /v1/search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Free-text food query, e.g. "snickers"
    pub search_input: String,
}

impl SearchRequest {
    pub fn new(search_input: impl Into<String>) -> Self {
        Self {
            search_input: search_input.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let input = self.search_input.trim();
        if input.is_empty() {
            return Some("Search input cannot be empty".to_string());
        }
        if input.chars().count() > MAX_SEARCH_INPUT_LENGTH {
            return Some(format!(
                "Search input exceeds maximum length of {} characters",
                MAX_SEARCH_INPUT_LENGTH
            ));
        }
        None
    }

    /// Normalized form used as cache and storage key.
    pub fn cache_key(&self) -> String {
        normalize_search_input(&self.search_input)
    }
}

/// Trims and lower-cases a search input so "Mars " and "mars" share a key.
pub fn normalize_search_input(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserialize() {
        let json = r#"{"search_input": "cheddar cheese"}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.search_input, "cheddar cheese");
    }

    #[test]
    fn test_validate_empty_input() {
        assert!(SearchRequest::new("").validate().is_some());
        assert!(SearchRequest::new("   ").validate().is_some());
    }

    #[test]
    fn test_validate_too_long() {
        let req = SearchRequest::new("x".repeat(MAX_SEARCH_INPUT_LENGTH + 1));
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(SearchRequest::new("twix").validate().is_none());
    }

    #[test]
    fn test_cache_key_normalizes() {
        assert_eq!(SearchRequest::new("  Mars Bar ").cache_key(), "mars bar");
    }
}
