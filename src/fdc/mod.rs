//! Food Data Central Module
//!
//! Client for the U.S. Department of Agriculture Food Data Central API.

mod client;
pub mod models;
mod url;

use async_trait::async_trait;
use thiserror::Error;

pub use client::{FdcClient, FdcConfig};
pub use models::{FdcDetails, FdcFood, FdcSearchResponse, FoodNutrient, FoodPortion, Nutrient};
pub use url::{build_request_url, FdcMethod};

// == FDC Error Enum ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FdcError {
    /// Client was configured without a URL or key
    #[error("Invalid Food Data Central configuration: {0}")]
    InvalidConfig(String),

    /// Network failure, timeout or non-2xx answer
    #[error("Food Data Central unavailable: {0}")]
    ServiceUnavailable(String),

    /// No food with the requested identifier
    #[error("Food not found in Food Data Central: {0}")]
    NotFound(String),

    /// 2xx answer whose body could not be decoded
    #[error("Invalid Food Data Central response: {0}")]
    InvalidResponse(String),
}

// == Provider Trait ==
/// External source of food search results and nutrient details.
///
/// Implementations must bound each call in time; dropping the returned
/// future cancels the call.
#[async_trait]
pub trait FoodDataProvider: Send + Sync {
    /// Free-text food search.
    async fn search(&self, query: &str) -> Result<FdcSearchResponse, FdcError>;

    /// Full record for one food.
    async fn details(&self, fdc_id: u64) -> Result<FdcDetails, FdcError>;
}
