//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations on the tree producer.
///
/// Cycles cannot occur: children are exclusively owned by their parent, so the
/// type system rules them out. Duplicate ids remain the one malformed-input
/// case that needs a runtime check.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate node id in tree: {0}")]
    DuplicateId(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
