//! Infrastructure layer: key-value persistence, configuration, and the
//! service that keeps the in-memory ledger and the store in step.

pub mod config;
pub mod repository;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use repository::LedgerRepository;
pub use service::{InventoryService, ServiceError};
pub use store::{FileStore, InMemoryStore, KeyValueStore, StoreError};
