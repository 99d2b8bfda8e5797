//! Server host holding the assembled application state
//!
//! The host is the single source of truth handed to the REST exposure: every
//! registered record route and the auth provider guarding them.

use crate::core::AuthProvider;
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerBuilder::new()
///     .register_module(RestaurantModule::new(stores))
///     .build_host()?;
///
/// let app = RestExposure::build_router(Arc::new(host))?;
/// ```
pub struct ServerHost {
    /// Entity registry for record routes
    pub entity_registry: EntityRegistry,

    /// Gate applied in front of every record route
    pub auth: Arc<dyn AuthProvider>,
}

impl ServerHost {
    /// Build the host from builder components
    pub fn new(entity_registry: EntityRegistry, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            entity_registry,
            auth,
        }
    }

    /// Get resource names registered in the host
    pub fn resource_names(&self) -> Vec<&str> {
        self.entity_registry.resource_names()
    }

    /// Check if host is properly initialized
    pub fn is_ready(&self) -> bool {
        !self.entity_registry.resource_names().is_empty()
    }
}
