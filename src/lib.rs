//! # Bistro
//!
//! A record-management REST backend for restaurant operations.
//!
//! ## Features
//!
//! - **Seven record types**: restaurants, staff, menu items, orders,
//!   reservations, inventory items and expenses
//! - **Macro-declared records**: one `impl_record!` call per type generates the
//!   record, its creation draft and its required-field list
//! - **Uniform routes**: `POST /{resource}`, `GET /{resource}` (paginated) and
//!   `GET /{resource}/{id}` for every type
//! - **Uniform responses**: every outcome is a `{status, message, data}` envelope
//! - **Shared-secret gate**: record routes require the configured token in the
//!   `Authorization` header
//! - **Pluggable storage**: LMDB on disk or process memory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bistro::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServiceConfig::default();
//!     let stores = RestaurantStores::open(&config.storage)?;
//!
//!     ServerBuilder::new()
//!         .with_config(config)
//!         .register_module(RestaurantModule::new(stores))
//!         .serve()
//!         .await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ApiError, AuthProvider, Envelope, IdGenerator, Module, NoAuthProvider, QueryParams,
        Record, RecordStore, StaticTokenAuth, UuidGenerator, ValidationError,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Records ===
    pub use crate::entities::{
        Expense, InventoryItem, MenuItem, Order, Reservation, Restaurant, RestaurantModule,
        Staff,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRecordStore, RestaurantStores};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::{LmdbEnvironment, LmdbRecordStore};

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, RouteContext, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
