//! Book service

use std::sync::Arc;

use log::info;

use super::require;
use crate::application::dto::BookDto;
use crate::application::mappers::{book_from_dto, book_from_record, book_to_dto, book_to_record};
use crate::domain::book::BookRepository;
use crate::shared::types::PageRequest;
use crate::shared::validations::validate_dto;
use crate::support::errors::{CatalogError, CatalogResult};

/// Use cases for books, addressed by ISBN.
///
/// The list and single lookups come in two flavors because callers differ
/// in whether emptiness is exceptional: `get_*` treats it as a failure,
/// `find_*` as a normal outcome.
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Strict paged list: an empty page is a business condition.
    pub async fn get_all(&self, page: PageRequest) -> CatalogResult<Vec<BookDto>> {
        let books = self.find_all(page).await?;
        if books.is_empty() {
            return Err(CatalogError::EmptyCatalog { entity: "book" });
        }
        Ok(books)
    }

    /// Lenient paged list: an empty page is an empty result. The page
    /// request is handed to the repository untouched.
    pub async fn find_all(&self, page: PageRequest) -> CatalogResult<Vec<BookDto>> {
        let records = self.repository.find_all(page).await?;
        records
            .into_iter()
            .map(|record| {
                let book = book_from_record(Some(record))?;
                require(book_to_dto(Some(book)), "book")
            })
            .collect()
    }

    /// Strict lookup: a miss fails, naming the ISBN.
    pub async fn get_by_isbn(&self, isbn: &str) -> CatalogResult<BookDto> {
        self.find_by_isbn(isbn)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    /// Lenient lookup: a miss is `None`.
    pub async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookDto>> {
        let book = match self.repository.find_by_isbn(isbn).await? {
            Some(record) => Some(book_from_record(Some(record))?),
            None => None,
        };
        Ok(book_to_dto(book))
    }

    /// Creates a book.
    ///
    /// A missing author collection is rejected outright as an argument
    /// error, before any other check. The ISBN existence check and the
    /// save are two separate repository calls with no isolation
    /// guarantee; a write-time uniqueness violation reported by the
    /// repository surfaces as the same already-exists failure.
    pub async fn create(&self, dto: BookDto) -> CatalogResult<BookDto> {
        if dto.authors().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "a book must have at least one author".to_string(),
            ));
        }
        validate_dto(&dto)?;
        let book = book_from_dto(Some(dto))?;
        let record = book_to_record(Some(book))?;
        if self.repository.find_by_isbn(&record.isbn).await?.is_some() {
            return Err(CatalogError::AlreadyExists {
                entity: "book",
                key: record.isbn,
            });
        }
        let stored = self.repository.save(record).await?;
        info!("book created: {}", stored.isbn);
        let created = book_from_record(Some(stored))?;
        require(book_to_dto(Some(created)), "book")
    }

    /// Full-record replace of the book addressed by `isbn`.
    pub async fn update(&self, isbn: &str, dto: BookDto) -> CatalogResult<BookDto> {
        validate_dto(&dto)?;
        if self.repository.find_by_isbn(isbn).await?.is_none() {
            return Err(not_found(isbn));
        }
        let book = book_from_dto(Some(dto))?;
        let record = book_to_record(Some(book))?;
        let stored = self.repository.update(isbn, record).await?;
        info!("book updated: {isbn}");
        let updated = book_from_record(Some(stored))?;
        require(book_to_dto(Some(updated)), "book")
    }

    /// Deletes the book addressed by `isbn`, returning the number of
    /// records removed.
    pub async fn delete(&self, isbn: &str) -> CatalogResult<u64> {
        if self.repository.find_by_isbn(isbn).await?.is_none() {
            return Err(not_found(isbn));
        }
        let removed = self.repository.delete(isbn).await?;
        info!("book deleted: {isbn} ({removed} records)");
        Ok(removed)
    }
}

fn not_found(isbn: &str) -> CatalogError {
    CatalogError::NotFound {
        entity: "book",
        key: isbn.to_string(),
    }
}
