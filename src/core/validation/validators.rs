//! Field presence validation and draft parsing

use crate::core::error::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Check that every required field is present in the payload
///
/// Presence only: a key counts as present whatever its value, `null`
/// included. Fields are checked in order and the first missing one is
/// reported.
///
/// # Example
///
/// ```rust
/// use bistro::core::validation::validate_payload;
/// use serde_json::json;
///
/// let payload = json!({"name": "Cafe A"});
/// let err = validate_payload(&["name", "location"], &payload).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid payload: missing location");
/// ```
pub fn validate_payload(required_fields: &[&str], payload: &Value) -> Result<(), ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    match required_fields
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        Some(field) => Err(ValidationError::MissingField {
            field: (*field).to_string(),
        }),
        None => Ok(()),
    }
}

/// Deserialize a validated payload into a typed draft
pub fn parse_draft<D: DeserializeOwned>(payload: Value) -> Result<D, ValidationError> {
    serde_json::from_value(payload).map_err(|e| ValidationError::InvalidField {
        message: e.to_string(),
    })
}
