//! Axum extractor for validated create payloads
//!
//! This module provides the `Validated<T>` extractor that checks required
//! fields and parses the record draft before the handler runs.

use super::validators::{parse_draft, validate_payload};
use crate::core::entity::Record;
use crate::core::error::{ApiError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Axum extractor yielding the typed draft of record `T`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_restaurant(
///     Validated(draft): Validated<Restaurant>,
/// ) -> Result<Envelope, ApiError> {
///     // draft has every required field and the right types
/// }
/// ```
pub struct Validated<T: Record>(pub T::Draft);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Record,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|e| ValidationError::InvalidBody {
                message: e.body_text(),
            })?;

        validate_payload(T::required_fields(), &payload)?;

        Ok(Validated(parse_draft(payload)?))
    }
}
