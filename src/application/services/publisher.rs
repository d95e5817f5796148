//! Publisher service
//!
//! Mirrors the author service's shape: list, get-by-slug, create without
//! a duplicate guard, full-record update, delete.

use std::sync::Arc;

use log::info;

use super::require;
use crate::application::dto::PublisherDto;
use crate::application::mappers::{
    publisher_from_dto, publisher_from_record, publisher_to_dto, publisher_to_record,
};
use crate::domain::publisher::PublisherRepository;
use crate::shared::validations::validate_dto;
use crate::support::errors::{CatalogError, CatalogResult};

pub struct PublisherService {
    repository: Arc<dyn PublisherRepository>,
}

impl PublisherService {
    pub fn new(repository: Arc<dyn PublisherRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> CatalogResult<Vec<PublisherDto>> {
        let records = self.repository.find_all().await?;
        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog {
                entity: "publisher",
            });
        }
        records
            .into_iter()
            .map(|record| {
                let publisher = publisher_from_record(Some(record))?;
                require(publisher_to_dto(Some(publisher)), "publisher")
            })
            .collect()
    }

    pub async fn get_by_slug(&self, slug: &str) -> CatalogResult<PublisherDto> {
        let record = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))?;
        let publisher = publisher_from_record(Some(record))?;
        require(publisher_to_dto(Some(publisher)), "publisher")
    }

    /// Creates a publisher. As with authors, slug uniqueness belongs to
    /// the repository; a write-time collision passes through unchanged.
    pub async fn create(&self, dto: PublisherDto) -> CatalogResult<PublisherDto> {
        validate_dto(&dto)?;
        let publisher = publisher_from_dto(Some(dto))?;
        let record = publisher_to_record(Some(publisher))?;
        let stored = self.repository.create(record).await?;
        info!("publisher created: {}", stored.slug);
        let created = publisher_from_record(Some(stored))?;
        require(publisher_to_dto(Some(created)), "publisher")
    }

    pub async fn update(&self, slug: &str, dto: PublisherDto) -> CatalogResult<PublisherDto> {
        validate_dto(&dto)?;
        if self.repository.find_by_slug(slug).await?.is_none() {
            return Err(not_found(slug));
        }
        let publisher = publisher_from_dto(Some(dto))?;
        let record = publisher_to_record(Some(publisher))?;
        let stored = self.repository.update(slug, record).await?;
        info!("publisher updated: {slug}");
        let updated = publisher_from_record(Some(stored))?;
        require(publisher_to_dto(Some(updated)), "publisher")
    }

    pub async fn delete(&self, slug: &str) -> CatalogResult<u64> {
        if self.repository.find_by_slug(slug).await?.is_none() {
            return Err(not_found(slug));
        }
        let removed = self.repository.delete(slug).await?;
        info!("publisher deleted: {slug} ({removed} records)");
        Ok(removed)
    }
}

fn not_found(slug: &str) -> CatalogError {
    CatalogError::NotFound {
        entity: "publisher",
        key: slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use dashmap::DashMap;

    use crate::domain::publisher::PublisherRecord;

    struct InMemoryPublishers {
        records: DashMap<String, PublisherRecord>,
        id_counter: AtomicI64,
    }

    impl InMemoryPublishers {
        fn new() -> Self {
            Self {
                records: DashMap::new(),
                id_counter: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl PublisherRepository for InMemoryPublishers {
        async fn find_all(&self) -> CatalogResult<Vec<PublisherRecord>> {
            Ok(self.records.iter().map(|e| e.value().clone()).collect())
        }

        async fn find_by_slug(&self, slug: &str) -> CatalogResult<Option<PublisherRecord>> {
            Ok(self.records.get(slug).map(|e| e.value().clone()))
        }

        async fn create(&self, mut record: PublisherRecord) -> CatalogResult<PublisherRecord> {
            if self.records.contains_key(&record.slug) {
                return Err(CatalogError::AlreadyExists {
                    entity: "publisher",
                    key: record.slug,
                });
            }
            record.id = Some(self.id_counter.fetch_add(1, Ordering::SeqCst));
            self.records.insert(record.slug.clone(), record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            slug: &str,
            record: PublisherRecord,
        ) -> CatalogResult<PublisherRecord> {
            self.records.insert(slug.to_string(), record.clone());
            Ok(record)
        }

        async fn delete(&self, slug: &str) -> CatalogResult<u64> {
            Ok(self.records.remove(slug).map(|_| 1).unwrap_or(0))
        }
    }

    fn service() -> PublisherService {
        PublisherService::new(Arc::new(InMemoryPublishers::new()))
    }

    fn sample_dto(slug: &str) -> PublisherDto {
        PublisherDto {
            id: None,
            name: "Editorial Planeta".to_string(),
            slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_a_business_condition() {
        let err = service().get_all().await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyCatalog {
                entity: "publisher"
            }
        );
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create(sample_dto("planeta")).await.unwrap();
        assert!(created.id.is_some());

        let fetched = svc.get_by_slug("planeta").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_has_no_duplicate_guard_but_surfaces_the_store_conflict() {
        let svc = service();
        svc.create(sample_dto("planeta")).await.unwrap();
        // The repository's own uniqueness enforcement reports the clash.
        let err = svc.create(sample_dto("planeta")).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::AlreadyExists {
                entity: "publisher",
                key: "planeta".to_string()
            }
        );
    }

    #[tokio::test]
    async fn create_rejects_invalid_slug() {
        let err = service().create(sample_dto("Not Valid")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn get_by_slug_miss_names_the_key() {
        let err = service().get_by_slug("missing").await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                entity: "publisher",
                key: "missing".to_string()
            }
        );
    }

    #[tokio::test]
    async fn update_and_delete_follow_the_author_shape() {
        let svc = service();
        svc.create(sample_dto("planeta")).await.unwrap();

        let mut replacement = sample_dto("planeta");
        replacement.name = "Grupo Planeta".to_string();
        let updated = svc.update("planeta", replacement).await.unwrap();
        assert_eq!(updated.name, "Grupo Planeta");

        assert_eq!(svc.delete("planeta").await.unwrap(), 1);
        assert!(matches!(
            svc.delete("planeta").await.unwrap_err(),
            CatalogError::NotFound { .. }
        ));
    }
}
