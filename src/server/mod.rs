//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that automatically registers:
//! - Create/list/get routes for every record type declared in modules
//! - Health routes
//! - The shared-secret gate in front of the record routes

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod handlers;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry, RecordDescriptor};
pub use exposure::RestExposure;
pub use handlers::RouteContext;
pub use host::ServerHost;
