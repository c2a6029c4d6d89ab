//! Response DTOs for the nutrition API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// A food item returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food Data Central identifier
    pub fdc_id: u64,
    pub description: String,
    #[serde(default)]
    pub brand_owner: String,
}

/// Response body for a food search (POST /v1/search)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Foods matching the search input
    pub foods: Vec<FoodItem>,
}

/// Carbohydrate content per 100 g of the food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Carbohydrates {
    pub amount: f64,
    pub unit_name: String,
}

/// A serving size of the food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Total grams in the portion
    pub gram_weight: f64,
    /// Human description, e.g. "1 bar"
    pub description: String,
}

/// Response body for food details (GET /v1/details/:fdc_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsResponse {
    pub description: String,
    pub carbohydrates: Carbohydrates,
    pub portions: Vec<Portion>,
}

/// Response body for the health endpoint (GET /v1/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "ok" or a short reason the service is not ready
    pub status: String,
    /// Crate version of the running build
    pub version: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn healthy() -> Self {
        Self::new("ok")
    }
}

/// Statistics of one cache, with derived hit rate
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub capacity: usize,
}

impl CacheStatsResponse {
    pub fn new(stats: CacheStats, capacity: usize) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
            capacity,
        }
    }
}

/// Response body for the stats endpoint (GET /v1/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub search: CacheStatsResponse,
    pub details: CacheStatsResponse,
}

/// Response body for cache invalidation (DELETE /v1/cache/...)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The cache key that was dropped
    pub key: String,
}

impl InvalidateResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Cache entry '{}' removed", key),
            key,
        }
    }
}
