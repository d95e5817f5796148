//! Book conversions
//!
//! The composite family: converts the nested publisher and the ordered
//! author collection along with the book itself. Rebuilding the domain
//! entity re-runs its construction guards and recomputes the final
//! price, so no price ever crosses a conversion unverified.

use super::absent;
use super::author::{author_from_dto, author_from_record, author_to_dto, author_to_record};
use super::publisher::{
    publisher_from_dto, publisher_from_record, publisher_to_dto, publisher_to_record,
};
use crate::application::dto::BookDto;
use crate::domain::book::{Book, BookRecord};
use crate::support::errors::CatalogResult;

pub fn book_from_record(record: Option<BookRecord>) -> CatalogResult<Book> {
    let record = record.ok_or_else(absent("book record"))?;
    // An absent author collection becomes an empty one, never an absent
    // value: the domain book requires a concrete collection.
    let authors = record
        .authors
        .unwrap_or_default()
        .into_iter()
        .map(|author| author_from_record(Some(author)))
        .collect::<CatalogResult<Vec<_>>>()?;
    let publisher = publisher_from_record(Some(record.publisher))?;
    Book::new(
        record.id,
        record.isbn,
        record.title_es,
        record.title_en,
        record.synopsis_es,
        record.synopsis_en,
        record.base_price,
        record.discount_percentage,
        record.cover,
        record.publication_date,
        publisher,
        authors,
    )
}

pub fn book_to_record(book: Option<Book>) -> CatalogResult<BookRecord> {
    let parts = book.ok_or_else(absent("book"))?.into_parts();
    let authors = parts
        .authors
        .into_iter()
        .map(|author| author_to_record(Some(author)))
        .collect::<CatalogResult<Vec<_>>>()?;
    let publisher = publisher_to_record(Some(parts.publisher))?;
    Ok(BookRecord {
        id: parts.id,
        isbn: parts.isbn,
        title_es: parts.title_es,
        title_en: parts.title_en,
        synopsis_es: parts.synopsis_es,
        synopsis_en: parts.synopsis_en,
        base_price: parts.base_price,
        discount_percentage: parts.discount_percentage,
        cover: parts.cover,
        publication_date: parts.publication_date,
        publisher,
        authors: Some(authors),
    })
}

pub fn book_to_dto(book: Option<Book>) -> Option<BookDto> {
    let parts = book?.into_parts();
    let publisher = publisher_to_dto(Some(parts.publisher))?;
    let authors = parts
        .authors
        .into_iter()
        .map(|author| author_to_dto(Some(author)))
        .collect::<Option<Vec<_>>>()?;
    Some(BookDto::from_parts(
        parts.id,
        parts.isbn,
        parts.title_es,
        parts.title_en,
        parts.synopsis_es,
        parts.synopsis_en,
        parts.base_price,
        parts.discount_percentage,
        parts.price,
        parts.cover,
        parts.publication_date,
        publisher,
        authors,
    ))
}

pub fn book_from_dto(dto: Option<BookDto>) -> CatalogResult<Book> {
    let parts = dto.ok_or_else(absent("book dto"))?.into_parts();
    let authors = parts
        .authors
        .into_iter()
        .map(|author| author_from_dto(Some(author)))
        .collect::<CatalogResult<Vec<_>>>()?;
    let publisher = publisher_from_dto(Some(parts.publisher))?;
    // The DTO's carried price is dropped on purpose; the domain book
    // derives its own from base price and discount.
    Book::new(
        parts.id,
        parts.isbn,
        parts.title_es,
        parts.title_en,
        parts.synopsis_es,
        parts.synopsis_en,
        parts.base_price,
        parts.discount_percentage,
        parts.cover,
        parts.publication_date,
        publisher,
        authors,
    )
}
