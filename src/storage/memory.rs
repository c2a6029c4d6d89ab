//! In-process storage backend.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{DetailsResponse, FoodItem};
use crate::storage::tables::Tables;
use crate::storage::{FoodStorage, StorageError};

/// [`FoodStorage`] kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FoodStorage for MemoryStorage {
    async fn search(&self, term: &str) -> Result<Option<Vec<FoodItem>>, StorageError> {
        Ok(self.tables.read().await.search(term))
    }

    async fn save_search(&self, term: &str, foods: &[FoodItem]) -> Result<(), StorageError> {
        self.tables.write().await.save_search(term, foods);
        Ok(())
    }

    async fn details(&self, fdc_id: u64) -> Result<Option<DetailsResponse>, StorageError> {
        Ok(self.tables.read().await.details(fdc_id))
    }

    async fn save_details(
        &self,
        fdc_id: u64,
        details: &DetailsResponse,
    ) -> Result<(), StorageError> {
        self.tables.write().await.save_details(fdc_id, details);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Carbohydrates;

    fn food(fdc_id: u64, description: &str) -> FoodItem {
        FoodItem {
            fdc_id,
            description: description.to_string(),
            brand_owner: "Mars Inc.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_empty_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.search("mars").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_search() {
        let storage = MemoryStorage::new();
        let foods = vec![food(1, "MARS BAR"), food(2, "MARS ALMOND")];

        storage.save_search("Mars", &foods).await.unwrap();

        assert_eq!(storage.search("mars").await.unwrap(), Some(foods));
    }

    #[tokio::test]
    async fn test_search_matches_substring_and_dedups() {
        let storage = MemoryStorage::new();
        storage
            .save_search("mars bar", &[food(1, "MARS BAR")])
            .await
            .unwrap();
        storage
            .save_search("mars", &[food(1, "MARS BAR"), food(3, "MARS WAFER")])
            .await
            .unwrap();

        let found = storage.search("mar").await.unwrap().unwrap();
        let ids: Vec<u64> = found.iter().map(|f| f.fdc_id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(storage.search("twix").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_get_details() {
        let storage = MemoryStorage::new();
        let details = DetailsResponse {
            description: "Twix".to_string(),
            carbohydrates: Carbohydrates {
                amount: 64.6,
                unit_name: "g".to_string(),
            },
            portions: vec![],
        };

        assert_eq!(storage.details(7).await.unwrap(), None);
        storage.save_details(7, &details).await.unwrap();
        assert_eq!(storage.details(7).await.unwrap(), Some(details));
        assert!(storage.status_check().await.is_ok());
    }
}
