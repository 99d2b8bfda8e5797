//! Typed error handling for the record service
//!
//! Every failure a request can hit is an [`ApiError`]. Each variant maps to
//! one HTTP status code and renders as the standard
//! [`Envelope`](crate::core::response::Envelope), so clients see the same
//! `{status, message, data}` shape whatever went wrong.
//!
//! # Error Categories
//!
//! - `Forbidden`: missing or wrong shared-secret token (403)
//! - `Validation`: payload rejected before a record is built (400)
//! - `NotFound`: no record under the requested id (404)
//! - `EmptyCollection`: a list query matched nothing (404)
//! - `Storage`: the backend failed (500)
//! - `Serialization`: a response payload could not be encoded (500)

use crate::core::response::Envelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// The main error type returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid `Authorization` token
    #[error("Forbidden: Invalid token")]
    Forbidden,

    /// Payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this id in the entity's store
    #[error("{label} not found with id={id}")]
    NotFound { label: &'static str, id: String },

    /// The requested page holds no record
    #[error("No {label_plural} found.")]
    EmptyCollection { label_plural: String },

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// A response payload could not be serialized
    #[error("Internal error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a create payload is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent
    #[error("Invalid payload: missing {field}")]
    MissingField { field: String },

    /// The body is valid JSON but not an object
    #[error("Invalid payload: expected a JSON object")]
    NotAnObject,

    /// The body could not be read as JSON
    #[error("Invalid payload: {message}")]
    InvalidBody { message: String },

    /// Fields are present but do not have the expected types
    #[error("Invalid payload: {message}")]
    InvalidField { message: String },
}

impl ApiError {
    /// Build a not-found error for a record type
    pub fn not_found(label: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            label,
            id: id.into(),
        }
    }

    /// Build an empty-collection error from a plural label ("Menu items")
    pub fn empty_collection(label_plural: &str) -> Self {
        ApiError::EmptyCollection {
            label_plural: label_plural.to_lowercase(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::EmptyCollection { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the response envelope
    pub fn to_envelope(&self) -> Envelope {
        Envelope::new(self.status_code(), self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(e) => tracing::error!(error = %e, "storage backend failure"),
            ApiError::Serialization(e) => tracing::error!(error = %e, "response serialization failure"),
            _ => {}
        }
        self.to_envelope().into_response()
    }
}
