//! Sugar - nutrition lookup service
//!
//! Answers food searches and carbohydrate details from an in-process LRU cache
//! with TTL, falling back to storage and then to USDA Food Data Central.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fdc;
pub mod models;
pub mod nutrients;
pub mod server;
pub mod storage;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
