//! Shared fixtures for handler, route and task tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::AppState;
use crate::cache::{Cache, CacheConfig, ManualClock};
use crate::fdc::{
    FdcDetails, FdcError, FdcFood, FdcSearchResponse, FoodDataProvider, FoodNutrient,
    FoodPortion, Nutrient,
};
use crate::models::{DetailsResponse, FoodItem};
use crate::storage::{FoodStorage, MemoryStorage, StorageError};

pub(crate) const TEST_TTL: Duration = Duration::from_secs(3600);

/// Provider answering every call with a canned result.
pub(crate) struct StubProvider {
    search_result: Result<FdcSearchResponse, FdcError>,
    details_result: Result<FdcDetails, FdcError>,
    pub search_calls: AtomicUsize,
    pub details_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(
        search_result: Result<FdcSearchResponse, FdcError>,
        details_result: Result<FdcDetails, FdcError>,
    ) -> Self {
        Self {
            search_result,
            details_result,
            search_calls: AtomicUsize::new(0),
            details_calls: AtomicUsize::new(0),
        }
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new(Ok(stub_search()), Ok(stub_details()))
    }
}

#[async_trait]
impl FoodDataProvider for StubProvider {
    async fn search(&self, _query: &str) -> Result<FdcSearchResponse, FdcError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search_result.clone()
    }

    async fn details(&self, _fdc_id: u64) -> Result<FdcDetails, FdcError> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.details_result.clone()
    }
}

/// Storage whose every call fails.
pub(crate) struct FailingStorage;

#[async_trait]
impl FoodStorage for FailingStorage {
    async fn search(&self, _term: &str) -> Result<Option<Vec<FoodItem>>, StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn save_search(&self, _term: &str, _foods: &[FoodItem]) -> Result<(), StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn details(&self, _fdc_id: u64) -> Result<Option<DetailsResponse>, StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn save_details(
        &self,
        _fdc_id: u64,
        _details: &DetailsResponse,
    ) -> Result<(), StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn status_check(&self) -> Result<(), StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }
}

pub(crate) fn stub_search() -> FdcSearchResponse {
    FdcSearchResponse {
        total_hits: 2,
        current_page: 1,
        total_pages: 1,
        foods: vec![
            FdcFood {
                fdc_id: 1104647,
                description: "SNICKERS".to_string(),
                brand_owner: Some("Mars Inc.".to_string()),
            },
            FdcFood {
                fdc_id: 1104648,
                description: "MARS BAR".to_string(),
                brand_owner: None,
            },
        ],
    }
}

pub(crate) fn stub_details() -> FdcDetails {
    FdcDetails {
        fdc_id: 1104647,
        description: "SNICKERS".to_string(),
        food_nutrients: vec![FoodNutrient {
            kind: Some("FoodNutrient".to_string()),
            id: 1,
            nutrient: Nutrient {
                id: 1005,
                number: Some("205".to_string()),
                name: "Carbohydrate, by difference".to_string(),
                rank: Some(1110),
                unit_name: "g".to_string(),
            },
            amount: Some(59.3),
        }],
        food_portions: vec![FoodPortion {
            id: 10,
            gram_weight: 52.7,
            portion_description: Some("1 bar".to_string()),
            sequence_number: Some(1),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub(crate) struct Harness {
    pub state: AppState,
    pub clock: ManualClock,
    pub provider: Arc<StubProvider>,
}

/// State with the default stub provider and in-memory storage.
pub(crate) fn harness() -> Harness {
    harness_with(StubProvider::default(), None)
}

/// State around `provider`, using `storage` or a fresh [`MemoryStorage`].
pub(crate) fn harness_with(
    provider: StubProvider,
    storage: Option<Arc<dyn FoodStorage>>,
) -> Harness {
    let clock = ManualClock::new(1_000_000);
    let config = CacheConfig::new(16, TEST_TTL);
    let provider = Arc::new(provider);
    let storage = storage.unwrap_or_else(|| Arc::new(MemoryStorage::new()));

    let state = AppState::new(
        Cache::with_clock(config, Arc::new(clock.clone())).unwrap(),
        Cache::with_clock(config, Arc::new(clock.clone())).unwrap(),
        storage,
        provider.clone(),
    );

    Harness {
        state,
        clock,
        provider,
    }
}
