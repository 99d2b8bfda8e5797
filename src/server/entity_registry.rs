//! Entity registry for managing record descriptors and auto-generating routes

use super::handlers::{RecordState, RouteContext, create_record, get_record, list_records};
use crate::core::{Record, RecordStore};
use axum::{Router, routing::get};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Trait that describes how to build routes for a record type
///
/// Each record type (Restaurant, Order, Expense, etc.) is exposed through
/// one descriptor providing its create/list/get routes.
pub trait EntityDescriptor: Send + Sync {
    /// The resource name used in URLs (e.g., "orders")
    fn resource_name(&self) -> &str;

    /// Build the routes for this record type
    ///
    /// Should return a Router with routes like:
    /// - GET /{resource}
    /// - POST /{resource}
    /// - GET /{resource}/{id}
    fn build_routes(&self) -> Router;
}

/// Descriptor wiring the generic handlers to one record store
pub struct RecordDescriptor<T: Record> {
    state: RecordState<T>,
}

impl<T: Record> RecordDescriptor<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>, context: &RouteContext) -> Self {
        Self {
            state: RecordState::new(store, context),
        }
    }
}

impl<T: Record> EntityDescriptor for RecordDescriptor<T> {
    fn resource_name(&self) -> &str {
        T::resource_name()
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", T::resource_name());
        let item = format!("/{}/{{id}}", T::resource_name());

        Router::new()
            .route(&collection, get(list_records::<T>).post(create_record::<T>))
            .route(&item, get(get_record::<T>))
            .with_state(self.state.clone())
    }
}

/// Registry for all record types in the application
///
/// This registry collects descriptors from all registered modules and can
/// generate a router with all record routes.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register a descriptor
    ///
    /// The resource name is used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let resource = descriptor.resource_name().to_string();
        self.descriptors.insert(resource, descriptor);
    }

    /// Register the standard routes for record type `T`
    pub fn register_record<T: Record>(
        &mut self,
        store: Arc<dyn RecordStore<T>>,
        context: &RouteContext,
    ) {
        self.register(Box::new(RecordDescriptor::new(store, context)));
    }

    /// Build a router with all registered record routes
    ///
    /// This merges all record routes into a single router.
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Get all registered resource names, sorted
    pub fn resource_names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
