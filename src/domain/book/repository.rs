//! Book repository interface

use async_trait::async_trait;

use super::record::BookRecord;
use crate::shared::types::PageRequest;
use crate::support::errors::CatalogResult;

/// Persistence-agnostic CRUD contract for books, keyed by ISBN.
///
/// `find_all` receives the zero-based page request untouched; pagination
/// semantics belong to the implementation. The existence check performed
/// by the service before a save and the save itself are two separate
/// calls with no isolation guarantee, so implementations must enforce
/// ISBN uniqueness themselves and report a write-time collision as
/// `CatalogError::AlreadyExists`.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> CatalogResult<Vec<BookRecord>>;
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookRecord>>;
    async fn save(&self, record: BookRecord) -> CatalogResult<BookRecord>;
    async fn update(&self, isbn: &str, record: BookRecord) -> CatalogResult<BookRecord>;
    /// Returns the number of records removed.
    async fn delete(&self, isbn: &str) -> CatalogResult<u64>;
}
