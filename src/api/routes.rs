//! API Routes
//!
//! Configures the Axum router with all nutrition API endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    details_handler, health_handler, invalidate_details_handler, invalidate_search_handler,
    search_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/details/:fdc_id", get(details_handler))
        .route("/v1/cache/stats", get(stats_handler))
        .route("/v1/cache/search/:term", delete(invalidate_search_handler))
        .route("/v1/cache/details/:fdc_id", delete(invalidate_details_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
