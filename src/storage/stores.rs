//! The set of stores backing the seven record types
//!
//! Built once at startup and handed to the router. Nothing else holds a
//! store, so every record has exactly one owner.

use crate::config::{StorageBackend, StorageConfig};
use crate::core::RecordStore;
use crate::entities::{
    Expense, InventoryItem, MenuItem, Order, Reservation, Restaurant, Staff,
};
use crate::storage::InMemoryRecordStore;
use anyhow::Result;
use std::sync::Arc;

/// One independent store per record type
#[derive(Clone)]
pub struct RestaurantStores {
    pub restaurants: Arc<dyn RecordStore<Restaurant>>,
    pub staff: Arc<dyn RecordStore<Staff>>,
    pub menu: Arc<dyn RecordStore<MenuItem>>,
    pub orders: Arc<dyn RecordStore<Order>>,
    pub reservations: Arc<dyn RecordStore<Reservation>>,
    pub inventory: Arc<dyn RecordStore<InventoryItem>>,
    pub expenses: Arc<dyn RecordStore<Expense>>,
}

impl RestaurantStores {
    /// Stores living in process memory
    pub fn in_memory() -> Self {
        Self {
            restaurants: Arc::new(InMemoryRecordStore::new()),
            staff: Arc::new(InMemoryRecordStore::new()),
            menu: Arc::new(InMemoryRecordStore::new()),
            orders: Arc::new(InMemoryRecordStore::new()),
            reservations: Arc::new(InMemoryRecordStore::new()),
            inventory: Arc::new(InMemoryRecordStore::new()),
            expenses: Arc::new(InMemoryRecordStore::new()),
        }
    }

    /// Stores persisted in one LMDB environment, one sub-database each
    #[cfg(feature = "lmdb")]
    pub fn lmdb(env: &crate::storage::LmdbEnvironment) -> Result<Self> {
        Ok(Self {
            restaurants: Arc::new(env.store::<Restaurant>()?),
            staff: Arc::new(env.store::<Staff>()?),
            menu: Arc::new(env.store::<MenuItem>()?),
            orders: Arc::new(env.store::<Order>()?),
            reservations: Arc::new(env.store::<Reservation>()?),
            inventory: Arc::new(env.store::<InventoryItem>()?),
            expenses: Arc::new(env.store::<Expense>()?),
        })
    }

    /// Open the stores selected by the storage configuration
    pub fn open(config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::InMemory => {
                tracing::warn!("using in-memory storage, records are lost on exit");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "lmdb")]
            StorageBackend::Lmdb => {
                let env = crate::storage::LmdbEnvironment::open(&config.path, config.map_size)?;
                Self::lmdb(&env)
            }
            #[cfg(not(feature = "lmdb"))]
            StorageBackend::Lmdb => Err(anyhow::anyhow!(
                "LMDB storage requested but the `lmdb` feature is disabled"
            )),
        }
    }
}
