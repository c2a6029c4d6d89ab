//! API Handlers
//!
//! HTTP request handlers for each endpoint of the nutrition API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{ApiError, CacheError, Result};
use crate::fdc::FoodDataProvider;
use crate::models::{
    normalize_search_input, CacheStatsResponse, DetailsResponse, HealthResponse,
    InvalidateResponse, SearchRequest, SearchResponse, StatsResponse,
};
use crate::storage::FoodStorage;
use crate::tasks::spawn_populate;

/// Application state shared across all handlers.
///
/// Built once at startup; every handler receives a cheap clone.
#[derive(Clone)]
pub struct AppState {
    /// Search results keyed by normalized search input
    pub search_cache: Cache<SearchResponse>,
    /// Food details keyed by FDC ID
    pub details_cache: Cache<DetailsResponse>,
    pub storage: Arc<dyn FoodStorage>,
    pub provider: Arc<dyn FoodDataProvider>,
}

impl AppState {
    pub fn new(
        search_cache: Cache<SearchResponse>,
        details_cache: Cache<DetailsResponse>,
        storage: Arc<dyn FoodStorage>,
        provider: Arc<dyn FoodDataProvider>,
    ) -> Self {
        Self {
            search_cache,
            details_cache,
            storage,
            provider,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Both caches get the configured capacity and TTL.
    pub fn from_config(
        config: &Config,
        storage: Arc<dyn FoodStorage>,
        provider: Arc<dyn FoodDataProvider>,
    ) -> std::result::Result<Self, CacheError> {
        let cache_config = config.cache_config();
        Ok(Self::new(
            Cache::new(cache_config)?,
            Cache::new(cache_config)?,
            storage,
            provider,
        ))
    }
}

/// Handler for POST /v1/search
///
/// Looks the input up in the cache, then storage, then Food Data Central.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let key = req.cache_key();
    if let Some(cached) = state.search_cache.get(&key) {
        debug!(key = %key, "search served from cache");
        return Ok(Json(cached));
    }

    match state.storage.search(&key).await {
        Ok(Some(foods)) => {
            debug!(key = %key, count = foods.len(), "search served from storage");
            let resp = SearchResponse { foods };
            state.search_cache.add(key, resp.clone());
            return Ok(Json(resp));
        }
        Ok(None) => {}
        Err(err) => warn!(key = %key, error = %err, "storage search failed, asking Food Data Central"),
    }

    let resp = SearchResponse::from(state.provider.search(req.search_input.trim()).await?);
    info!(key = %key, count = resp.foods.len(), "search served from Food Data Central");

    // Nothing worth remembering in an empty result
    if !resp.foods.is_empty() {
        let storage = Arc::clone(&state.storage);
        let term = key.clone();
        let foods = resp.foods.clone();
        spawn_populate(state.search_cache.clone(), key, resp.clone(), async move {
            storage.save_search(&term, &foods).await
        });
    }

    Ok(Json(resp))
}

/// Handler for GET /v1/details/:fdc_id
///
/// Returns description, carbohydrates and portions of one food.
pub async fn details_handler(
    State(state): State<AppState>,
    Path(fdc_id): Path<String>,
) -> Result<Json<DetailsResponse>> {
    let fdc_id = parse_fdc_id(&fdc_id)?;
    let key = fdc_id.to_string();

    if let Some(cached) = state.details_cache.get(&key) {
        debug!(fdc_id, "details served from cache");
        return Ok(Json(cached));
    }

    match state.storage.details(fdc_id).await {
        Ok(Some(details)) => {
            debug!(fdc_id, "details served from storage");
            state.details_cache.add(key, details.clone());
            return Ok(Json(details));
        }
        Ok(None) => {}
        Err(err) => warn!(fdc_id, error = %err, "storage lookup failed, asking Food Data Central"),
    }

    let details = DetailsResponse::from(state.provider.details(fdc_id).await?);
    info!(fdc_id, "details served from Food Data Central");

    let storage = Arc::clone(&state.storage);
    let stored = details.clone();
    spawn_populate(state.details_cache.clone(), key, details.clone(), async move {
        storage.save_details(fdc_id, &stored).await
    });

    Ok(Json(details))
}

/// Handler for GET /v1/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        search: CacheStatsResponse::new(
            state.search_cache.stats(),
            state.search_cache.capacity(),
        ),
        details: CacheStatsResponse::new(
            state.details_cache.stats(),
            state.details_cache.capacity(),
        ),
    })
}

/// Handler for DELETE /v1/cache/search/:term
pub async fn invalidate_search_handler(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let key = normalize_search_input(&term);
    if state.search_cache.remove(&key) {
        Ok(Json(InvalidateResponse::new(key)))
    } else {
        Err(ApiError::NotFound(format!("No cached search for '{}'", key)))
    }
}

/// Handler for DELETE /v1/cache/details/:fdc_id
pub async fn invalidate_details_handler(
    State(state): State<AppState>,
    Path(fdc_id): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let key = parse_fdc_id(&fdc_id)?.to_string();
    if state.details_cache.remove(&key) {
        Ok(Json(InvalidateResponse::new(key)))
    } else {
        Err(ApiError::NotFound(format!("No cached details for FDC ID {}", key)))
    }
}

/// Handler for GET /v1/health
///
/// Reports 500 while the storage backend is not ready.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.storage.status_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(err) => {
            warn!(error = %err, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::new("storage not ready")),
            )
        }
    }
}

fn parse_fdc_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid FDC ID: '{}'", raw)))
}
