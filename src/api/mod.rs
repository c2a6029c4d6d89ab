//! API Module
//!
//! HTTP handlers and routing for the nutrition lookup REST API.
//!
//! # Endpoints
//! - `POST /v1/search` - Search foods by name
//! - `GET /v1/details/:fdc_id` - Carbohydrates and portions of one food
//! - `GET /v1/cache/stats` - Hit/miss counters of both caches
//! - `DELETE /v1/cache/search/:term` - Drop one cached search
//! - `DELETE /v1/cache/details/:fdc_id` - Drop one cached food
//! - `GET /v1/health` - Health check endpoint

pub mod handlers;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use handlers::*;
pub use routes::create_router;
