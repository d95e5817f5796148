//! Author repository interface

use async_trait::async_trait;

use super::record::AuthorRecord;
use crate::support::errors::CatalogResult;

/// Persistence-agnostic CRUD contract for authors, keyed by slug.
///
/// Natural-key uniqueness under concurrent writers is the implementation's
/// responsibility (e.g. a unique constraint); a write-time collision is
/// reported as `CatalogError::AlreadyExists`.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self) -> CatalogResult<Vec<AuthorRecord>>;
    async fn find_by_slug(&self, slug: &str) -> CatalogResult<Option<AuthorRecord>>;
    async fn create(&self, record: AuthorRecord) -> CatalogResult<AuthorRecord>;
    async fn update(&self, slug: &str, record: AuthorRecord) -> CatalogResult<AuthorRecord>;
    /// Returns the number of records removed.
    async fn delete(&self, slug: &str) -> CatalogResult<u64>;
}
