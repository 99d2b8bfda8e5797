//! Module system
//!
//! A module bundles record types with the stores backing them and knows
//! how to register their routes.

use crate::server::entity_registry::EntityRegistry;
use crate::server::handlers::RouteContext;

/// Trait for a service module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Resource names of the record types managed by this module
    fn resource_names(&self) -> Vec<&str>;

    /// Register record descriptors with the entity registry
    ///
    /// Each descriptor provides the create/list/get routes for one record
    /// type, bound to the shared `context`.
    fn register_entities(&self, context: &RouteContext, registry: &mut EntityRegistry);
}
