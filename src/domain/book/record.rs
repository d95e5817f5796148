//! Book persistence record

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::author::AuthorRecord;
use crate::domain::publisher::PublisherRecord;

/// Immutable data shape exchanged with the book store.
///
/// The nested publisher and author records are the cross-entity join
/// points (by slug). The author collection may be absent in stored data;
/// conversion into the domain turns absence into an empty list, never
/// into an absent value. There is no stored final price: it is derived
/// state owned by the domain entity.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
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
    pub publisher: PublisherRecord,
    pub authors: Option<Vec<AuthorRecord>>,
}
