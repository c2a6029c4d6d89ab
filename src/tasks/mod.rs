//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries at configured intervals
//! - Population: Caches and persists lookup results after the response is sent

mod cleanup;
mod populate;

pub use cleanup::spawn_cleanup_task;
pub use populate::spawn_populate;
