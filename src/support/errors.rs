//! Error taxonomy for the catalog core.
//!
//! Every failure is a synchronous signal from the call that produced it;
//! nothing is retried or batched at this layer.

use std::fmt;

use thiserror::Error;

/// A single declarative-constraint violation: the field path that failed
/// and the constraint's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Catalog-level error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// An internal precondition was violated by a caller inside this core,
    /// e.g. converting an absent record where presence was assumed.
    /// A defect signal, not a business outcome.
    #[error("contract violation: {0}")]
    Contract(String),

    /// A lookup by natural key found no record.
    #[error("{entity} not found: {key}")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// The strict list variants treat an empty store as a business
    /// condition rather than an empty success.
    #[error("there are no {entity} records in the catalog")]
    EmptyCatalog { entity: &'static str },

    /// A create attempt collided with an existing natural key.
    #[error("{entity} with key {key} already exists")]
    AlreadyExists {
        entity: &'static str,
        key: String,
    },

    /// Caller-supplied input violated a structural precondition checked
    /// inline by a service, e.g. an empty author list on book creation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An author with the same slug is already present on the book.
    #[error("author {slug} is already present on this book")]
    DuplicateAuthor { slug: String },

    /// Aggregated field-level violations from the declarative validator.
    /// Carries every violated field, not just the first.
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// A failure reported by a repository collaborator.
    #[error("storage error: {0}")]
    Storage(String),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
