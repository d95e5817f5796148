//! Entity services
//!
//! Each service combines repository lookups, the conversion layer and the
//! domain invariants into the public use cases, and decides what is a
//! business error versus a not-found versus a validation failure.

mod author;
mod book;
mod publisher;

pub use author::AuthorService;
pub use book::BookService;
pub use publisher::PublisherService;

use crate::support::errors::{CatalogError, CatalogResult};

/// Unwraps an optional-out conversion whose input was known to be
/// present. Absence here means a bug inside the core, not a business
/// outcome.
pub(crate) fn require<T>(value: Option<T>, what: &'static str) -> CatalogResult<T> {
    value.ok_or_else(|| CatalogError::Contract(format!("{what} conversion produced no value")))
}
