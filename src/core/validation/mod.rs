//! Payload validation
//!
//! Create payloads go through two gates before a record is built: a
//! presence check of the record's required fields, then typed
//! deserialization into the record's draft. Both gates run inside the
//! [`Validated`] extractor so handlers only ever see well-formed drafts.

pub mod extractor;
pub mod validators;

pub use extractor::Validated;
pub use validators::{parse_draft, validate_payload};
