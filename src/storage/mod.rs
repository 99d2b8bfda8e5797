//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;
pub mod stores;

pub use in_memory::InMemoryRecordStore;
#[cfg(feature = "lmdb")]
pub use lmdb::{LmdbEnvironment, LmdbRecordStore};
pub use stores::RestaurantStores;
