//! Core module containing fundamental traits and types for the service

pub mod auth;
pub mod entity;
pub mod error;
pub mod id;
pub mod module;
pub mod query;
pub mod response;
pub mod store;
pub mod validation;

pub use auth::{AuthProvider, NoAuthProvider, StaticTokenAuth};
pub use entity::Record;
pub use error::{ApiError, ValidationError};
pub use id::{IdGenerator, UuidGenerator};
pub use module::Module;
pub use query::QueryParams;
pub use response::Envelope;
pub use store::RecordStore;
