//! Book transfer shape

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::author::AuthorDto;
use super::publisher::PublisherDto;
use crate::shared::validations::{
    validate_discount_percentage, validate_non_negative_price, ISBN_PATTERN,
};
use crate::support::errors::{CatalogError, CatalogResult};

/// Book shape exchanged with callers at the boundary.
///
/// Unlike the other transfer shapes the fields are private: constructing
/// a `BookDto` with both language-tagged titles absent must fail
/// immediately, so all construction goes through [`BookDto::new`]. The
/// `price` field carries the precomputed final price as plain data; it is
/// never recomputed on the transfer side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BookDto {
    id: Option<i64>,
    #[validate(regex(path = *ISBN_PATTERN, message = "isbn must be exactly 13 digits"))]
    isbn: String,
    title_es: Option<String>,
    title_en: Option<String>,
    synopsis_es: Option<String>,
    synopsis_en: Option<String>,
    #[validate(custom(function = validate_non_negative_price))]
    base_price: Decimal,
    #[validate(custom(function = validate_discount_percentage))]
    discount_percentage: Decimal,
    price: Decimal,
    cover: Option<String>,
    publication_date: Option<NaiveDate>,
    #[validate(nested)]
    publisher: PublisherDto,
    #[validate(nested)]
    authors: Vec<AuthorDto>,
}

impl BookDto {
    /// Builds a book transfer object. Fails when both titles are absent,
    /// independent of every other field. An absent author collection is
    /// normalized to an empty one.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<i64>,
        isbn: String,
        title_es: Option<String>,
        title_en: Option<String>,
        synopsis_es: Option<String>,
        synopsis_en: Option<String>,
        base_price: Decimal,
        discount_percentage: Decimal,
        price: Decimal,
        cover: Option<String>,
        publication_date: Option<NaiveDate>,
        publisher: PublisherDto,
        authors: Option<Vec<AuthorDto>>,
    ) -> CatalogResult<Self> {
        if title_es.is_none() && title_en.is_none() {
            return Err(CatalogError::InvalidArgument(
                "at least one of the two titles must be present".to_string(),
            ));
        }
        Ok(Self::from_parts(
            id,
            isbn,
            title_es,
            title_en,
            synopsis_es,
            synopsis_en,
            base_price,
            discount_percentage,
            price,
            cover,
            publication_date,
            publisher,
            authors.unwrap_or_default(),
        ))
    }

    /// Crate-internal constructor for values converted from a domain book,
    /// whose own invariants already guarantee a title.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: Option<i64>,
        isbn: String,
        title_es: Option<String>,
        title_en: Option<String>,
        synopsis_es: Option<String>,
        synopsis_en: Option<String>,
        base_price: Decimal,
        discount_percentage: Decimal,
        price: Decimal,
        cover: Option<String>,
        publication_date: Option<NaiveDate>,
        publisher: PublisherDto,
        authors: Vec<AuthorDto>,
    ) -> Self {
        Self {
            id,
            isbn,
            title_es,
            title_en,
            synopsis_es,
            synopsis_en,
            base_price,
            discount_percentage,
            price,
            cover,
            publication_date,
            publisher,
            authors,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title_es(&self) -> Option<&str> {
        self.title_es.as_deref()
    }

    pub fn title_en(&self) -> Option<&str> {
        self.title_en.as_deref()
    }

    pub fn synopsis_es(&self) -> Option<&str> {
        self.synopsis_es.as_deref()
    }

    pub fn synopsis_en(&self) -> Option<&str> {
        self.synopsis_en.as_deref()
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn discount_percentage(&self) -> Decimal {
        self.discount_percentage
    }

    /// The precomputed final price carried as plain data.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn publication_date(&self) -> Option<NaiveDate> {
        self.publication_date
    }

    pub fn publisher(&self) -> &PublisherDto {
        &self.publisher
    }

    pub fn authors(&self) -> &[AuthorDto] {
        &self.authors
    }

    pub(crate) fn into_parts(self) -> BookDtoParts {
        BookDtoParts {
            id: self.id,
            isbn: self.isbn,
            title_es: self.title_es,
            title_en: self.title_en,
            synopsis_es: self.synopsis_es,
            synopsis_en: self.synopsis_en,
            base_price: self.base_price,
            discount_percentage: self.discount_percentage,
            cover: self.cover,
            publication_date: self.publication_date,
            publisher: self.publisher,
            authors: self.authors,
        }
    }
}

/// Owned field bundle used by the conversion layer when consuming a DTO.
/// The carried `price` is deliberately not part of it: the domain book
/// recomputes its own price.
pub(crate) struct BookDtoParts {
    pub id: Option<i64>,
    pub isbn: String,
    pub title_es: Option<String>,
    pub title_en: Option<String>,
    pub synopsis_es: Option<String>,
    pub synopsis_en: Option<String>,
    pub base_price: Decimal,
    pub discount_percentage: Decimal,
    pub cover: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub publisher: PublisherDto,
    pub authors: Vec<AuthorDto>,
}
