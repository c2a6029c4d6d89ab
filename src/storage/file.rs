//! Storage backend kept as a JSON document on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{DetailsResponse, FoodItem};
use crate::storage::tables::Tables;
use crate::storage::{FoodStorage, StorageError};

const STORE_FILE: &str = "foods.json";
const STORE_TMP_FILE: &str = "foods.json.tmp";

/// [`FoodStorage`] that survives restarts.
///
/// Every save rewrites the whole document: it is written next to the live
/// file and renamed over it, so a crash mid-write leaves the previous
/// version in place. Reads never touch the disk after [`FileStorage::open`].
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
    tables: RwLock<Tables>,
}

impl FileStorage {
    /// Opens the store in `dir`, creating the directory if needed.
    ///
    /// A missing store file means an empty store; an unreadable one is an
    /// error rather than silently starting over.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error("create storage directory", &dir, e))?;

        let path = dir.join(STORE_FILE);
        let tables = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Tables::default(),
            Err(e) => return Err(io_error("read", &path, e)),
        };

        info!(path = %path.display(), "file storage opened");
        Ok(Self {
            dir,
            tables: RwLock::new(tables),
        })
    }

    // Caller holds the write lock, so writers never interleave on disk.
    async fn persist(&self, tables: &Tables) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(tables)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let tmp = self.dir.join(STORE_TMP_FILE);
        let path = self.dir.join(STORE_FILE);
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| io_error("write", &tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("rename", &path, e))?;

        debug!(bytes = bytes.len(), "file storage flushed");
        Ok(())
    }
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Backend(format!("failed to {} {}: {}", action, path.display(), err))
}

#[async_trait]
impl FoodStorage for FileStorage {
    async fn search(&self, term: &str) -> Result<Option<Vec<FoodItem>>, StorageError> {
        Ok(self.tables.read().await.search(term))
    }

    async fn save_search(&self, term: &str, foods: &[FoodItem]) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.save_search(term, foods);
        self.persist(&tables).await
    }

    async fn details(&self, fdc_id: u64) -> Result<Option<DetailsResponse>, StorageError> {
        Ok(self.tables.read().await.details(fdc_id))
    }

    async fn save_details(
        &self,
        fdc_id: u64,
        details: &DetailsResponse,
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.save_details(fdc_id, details);
        self.persist(&tables).await
    }

    async fn status_check(&self) -> Result<(), StorageError> {
        match fs::metadata(&self.dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StorageError::Backend(format!(
                "{} is not a directory",
                self.dir.display()
            ))),
            Err(e) => Err(io_error("stat", &self.dir, e)),
        }
    }
}
