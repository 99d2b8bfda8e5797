//! Uniform response envelope
//!
//! Every reply, success or failure, has the same body shape:
//!
//! ```json
//! { "status": 201, "message": "Restaurant created successfully.", "data": { ... } }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{status, message, data}` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status code, repeated in the body
    pub status: u16,

    /// Human-readable outcome
    pub message: String,

    /// Payload, `null` when there is nothing to return
    pub data: Value,
}

impl Envelope {
    /// Create an envelope without data
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Value::Null,
        }
    }

    /// Create an envelope carrying a serializable payload
    pub fn with_data<T: Serialize>(
        status: StatusCode,
        message: impl Into<String>,
        data: &T,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            status: status.as_u16(),
            message: message.into(),
            data: serde_json::to_value(data)?,
        })
    }

    /// Status code of this envelope
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_without_data_serializes_null() {
        let envelope = Envelope::new(StatusCode::NOT_FOUND, "No restaurants found.");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"status": 404, "message": "No restaurants found.", "data": null})
        );
    }

    #[test]
    fn test_envelope_with_data() {
        let envelope =
            Envelope::with_data(StatusCode::OK, "ok", &vec!["a", "b"]).unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data, json!(["a", "b"]));
    }

    #[test]
    fn test_into_response_uses_envelope_status() {
        let response = Envelope::new(StatusCode::CREATED, "created").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
