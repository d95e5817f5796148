//! Book domain entity
//!
//! Carries the one piece of derived state in the catalog (the final
//! price) and the one piece of mutating domain logic (the duplicate
//! author guard).

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::author::Author;
use crate::domain::publisher::Publisher;
use crate::support::errors::{CatalogError, CatalogResult};

/// A book as the domain sees it.
///
/// Fields are private: the ISBN is immutable once set, the final price is
/// never independently settable, and the author collection only grows
/// through [`Book::add_author`].
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
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
    publisher: Publisher,
    authors: Vec<Author>,
}

impl Book {
    /// Builds a book, computing the final price and routing the initial
    /// author list through the duplicate guard.
    ///
    /// At least one of the two language-tagged titles must be present.
    /// Base price and discount range are deliberately NOT constrained
    /// here; that is the declarative validation layer's job.
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
        cover: Option<String>,
        publication_date: Option<NaiveDate>,
        publisher: Publisher,
        authors: Vec<Author>,
    ) -> CatalogResult<Self> {
        if title_es.is_none() && title_en.is_none() {
            return Err(CatalogError::InvalidArgument(
                "a book must have at least one title".to_string(),
            ));
        }
        let mut book = Self {
            id,
            isbn,
            title_es,
            title_en,
            synopsis_es,
            synopsis_en,
            base_price,
            discount_percentage,
            price: final_price(base_price, discount_percentage),
            cover,
            publication_date,
            publisher,
            authors: Vec::with_capacity(authors.len()),
        };
        for author in authors {
            book.add_author(author)?;
        }
        Ok(book)
    }

    /// Appends an author, rejecting one whose slug is already present.
    /// Insertion order is preserved.
    pub fn add_author(&mut self, author: Author) -> CatalogResult<()> {
        if self.authors.iter().any(|a| a.same_person(&author)) {
            return Err(CatalogError::DuplicateAuthor { slug: author.slug });
        }
        self.authors.push(author);
        Ok(())
    }

    pub fn set_base_price(&mut self, base_price: Decimal) {
        self.base_price = base_price;
        self.price = final_price(self.base_price, self.discount_percentage);
    }

    pub fn set_discount_percentage(&mut self, discount_percentage: Decimal) {
        self.discount_percentage = discount_percentage;
        self.price = final_price(self.base_price, self.discount_percentage);
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

    /// The derived final price, always in sync with base price and
    /// discount.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn publication_date(&self) -> Option<NaiveDate> {
        self.publication_date
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Decomposes the book for conversion into another representation.
    pub(crate) fn into_parts(self) -> BookParts {
        BookParts {
            id: self.id,
            isbn: self.isbn,
            title_es: self.title_es,
            title_en: self.title_en,
            synopsis_es: self.synopsis_es,
            synopsis_en: self.synopsis_en,
            base_price: self.base_price,
            discount_percentage: self.discount_percentage,
            price: self.price,
            cover: self.cover,
            publication_date: self.publication_date,
            publisher: self.publisher,
            authors: self.authors,
        }
    }
}

/// Owned field bundle handed to the conversion layer.
pub(crate) struct BookParts {
    pub id: Option<i64>,
    pub isbn: String,
    pub title_es: Option<String>,
    pub title_en: Option<String>,
    pub synopsis_es: Option<String>,
    pub synopsis_en: Option<String>,
    pub base_price: Decimal,
    pub discount_percentage: Decimal,
    pub price: Decimal,
    pub cover: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub publisher: Publisher,
    pub authors: Vec<Author>,
}

/// `price = round(base - round(base * discount / 100, 2), 2)`, both
/// roundings half-away-from-zero at two decimal places. The discount is
/// rounded before the subtraction and the result is rounded again; the
/// double rounding is intentional and observable on midpoint amounts.
fn final_price(base_price: Decimal, discount_percentage: Decimal) -> Decimal {
    let discount = (base_price * discount_percentage / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    (base_price - discount).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
