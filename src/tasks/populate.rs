//! Cache Population Task
//!
//! Write-behind path used after a lookup had to go past the cache.

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::storage::StorageError;

/// Adds `value` to `cache` and runs `persist` on a detached task.
///
/// The caller answers its request without waiting. A failed `persist` is
/// logged and otherwise ignored; the cache entry stays in place either way.
pub fn spawn_populate<V, P>(cache: Cache<V>, key: String, value: V, persist: P) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
    P: Future<Output = Result<(), StorageError>> + Send + 'static,
{
    tokio::spawn(async move {
        cache.add(key.clone(), value);

        match persist.await {
            Ok(()) => debug!(key = %key, "lookup result cached and persisted"),
            Err(err) => warn!(key = %key, error = %err, "failed to persist lookup result"),
        }
    })
}
