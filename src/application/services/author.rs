//! Author service

use std::sync::Arc;

use log::info;

use super::require;
use crate::application::dto::AuthorDto;
use crate::application::mappers::{
    author_from_dto, author_from_record, author_to_dto, author_to_record,
};
use crate::domain::author::AuthorRepository;
use crate::shared::validations::validate_dto;
use crate::support::errors::{CatalogError, CatalogResult};

/// Use cases for authors, addressed by slug.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Lists every author. An empty store is a business condition, not an
    /// empty success.
    pub async fn get_all(&self) -> CatalogResult<Vec<AuthorDto>> {
        let records = self.repository.find_all().await?;
        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog { entity: "author" });
        }
        records
            .into_iter()
            .map(|record| {
                let author = author_from_record(Some(record))?;
                require(author_to_dto(Some(author)), "author")
            })
            .collect()
    }

    pub async fn get_by_slug(&self, slug: &str) -> CatalogResult<AuthorDto> {
        let record = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))?;
        let author = author_from_record(Some(record))?;
        require(author_to_dto(Some(author)), "author")
    }

    /// Creates an author. Slug uniqueness is the repository's contract;
    /// no duplicate check happens at this layer.
    pub async fn create(&self, dto: AuthorDto) -> CatalogResult<AuthorDto> {
        validate_dto(&dto)?;
        let author = author_from_dto(Some(dto))?;
        let record = author_to_record(Some(author))?;
        let stored = self.repository.create(record).await?;
        info!("author created: {}", stored.slug);
        let created = author_from_record(Some(stored))?;
        require(author_to_dto(Some(created)), "author")
    }

    /// Full-record replace of the author addressed by `slug`.
    pub async fn update(&self, slug: &str, dto: AuthorDto) -> CatalogResult<AuthorDto> {
        validate_dto(&dto)?;
        if self.repository.find_by_slug(slug).await?.is_none() {
            return Err(not_found(slug));
        }
        let author = author_from_dto(Some(dto))?;
        let record = author_to_record(Some(author))?;
        let stored = self.repository.update(slug, record).await?;
        info!("author updated: {slug}");
        let updated = author_from_record(Some(stored))?;
        require(author_to_dto(Some(updated)), "author")
    }

    /// Deletes the author addressed by `slug`, returning the number of
    /// records removed.
    pub async fn delete(&self, slug: &str) -> CatalogResult<u64> {
        if self.repository.find_by_slug(slug).await?.is_none() {
            return Err(not_found(slug));
        }
        let removed = self.repository.delete(slug).await?;
        info!("author deleted: {slug} ({removed} records)");
        Ok(removed)
    }
}

fn not_found(slug: &str) -> CatalogError {
    CatalogError::NotFound {
        entity: "author",
        key: slug.to_string(),
    }
}
