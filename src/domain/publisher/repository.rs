//! Publisher repository interface

use async_trait::async_trait;

use super::record::PublisherRecord;
use crate::support::errors::CatalogResult;

/// Persistence-agnostic CRUD contract for publishers, keyed by slug.
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn find_all(&self) -> CatalogResult<Vec<PublisherRecord>>;
    async fn find_by_slug(&self, slug: &str) -> CatalogResult<Option<PublisherRecord>>;
    async fn create(&self, record: PublisherRecord) -> CatalogResult<PublisherRecord>;
    async fn update(&self, slug: &str, record: PublisherRecord) -> CatalogResult<PublisherRecord>;
    /// Returns the number of records removed.
    async fn delete(&self, slug: &str) -> CatalogResult<u64>;
}
