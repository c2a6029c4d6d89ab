//! Storage Module
//!
//! Durable home of lookup results. Handlers consult it after a cache miss and
//! before calling Food Data Central.

mod file;
mod memory;
mod tables;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DetailsResponse, FoodItem};

pub use file::FileStorage;
pub use memory::MemoryStorage;

// == Storage Error Enum ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend failed to read or write
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Stored data could not be decoded or encoded
    #[error("Storage data is corrupt: {0}")]
    Corrupt(String),
}

// == Storage Trait ==
/// Persistence for search results and food details.
#[async_trait]
pub trait FoodStorage: Send + Sync {
    /// Foods previously saved for search inputs matching `term`.
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn search(&self, term: &str) -> Result<Option<Vec<FoodItem>>, StorageError>;

    /// Records `foods` as the result of searching for `term`.
    async fn save_search(&self, term: &str, foods: &[FoodItem]) -> Result<(), StorageError>;

    /// Stored details for `fdc_id`, if any.
    async fn details(&self, fdc_id: u64) -> Result<Option<DetailsResponse>, StorageError>;

    /// Stores details for `fdc_id`, replacing earlier ones.
    async fn save_details(&self, fdc_id: u64, details: &DetailsResponse)
        -> Result<(), StorageError>;

    /// Reports whether the backend can serve requests.
    async fn status_check(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Opens the backend selected by configuration.
///
/// An empty `storage_dir` keeps everything in memory; otherwise results are
/// persisted under that directory.
pub async fn open(storage_dir: &str) -> Result<Arc<dyn FoodStorage>, StorageError> {
    let storage_dir = storage_dir.trim();
    if storage_dir.is_empty() {
        return Ok(Arc::new(MemoryStorage::new()));
    }
    Ok(Arc::new(FileStorage::open(storage_dir).await?))
}
