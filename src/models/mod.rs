//! Request and Response models for the nutrition API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{normalize_search_input, SearchRequest};
pub use responses::{
    CacheStatsResponse, Carbohydrates, DetailsResponse, FoodItem, HealthResponse,
    InvalidateResponse, Portion, SearchResponse, StatsResponse,
};
