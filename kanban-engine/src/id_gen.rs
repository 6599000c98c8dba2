//! Identifier generation for columns and tasks

use ulid::Ulid;

/// Source of fresh opaque identifiers.
///
/// Implementations must not return the same value twice within a process.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// ULID-backed generator: 26-character Crockford base32 strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn generate(&self) -> String {
        Ulid::new().to_string()
    }
}
