//! Identifier generation for newly created records

use uuid::Uuid;

/// Source of fresh record identifiers
///
/// Called exactly once per created record, before the record reaches its
/// store. Implementations must never hand out the same value twice.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier
    fn generate(&self) -> String;
}

/// Random 128-bit identifiers (UUID v4, hyphenated lowercase)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
