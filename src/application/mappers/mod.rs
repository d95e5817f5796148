//! Conversion layer
//!
//! Pure, stateless functions translating between the three
//! representations of each entity. The absence contracts differ by
//! direction and the asymmetry is deliberate:
//!
//! - converting an absent record or DTO *into* the domain is a contract
//!   failure — the call site was supposed to have checked presence;
//! - converting an absent domain object *out* to a DTO yields `None`
//!   without error — absence is a valid outcome on optional-read paths.

mod author;
mod book;
mod publisher;

pub use author::{author_from_dto, author_from_record, author_to_dto, author_to_record};
pub use book::{book_from_dto, book_from_record, book_to_dto, book_to_record};
pub use publisher::{
    publisher_from_dto, publisher_from_record, publisher_to_dto, publisher_to_record,
};

use crate::support::errors::CatalogError;

pub(crate) fn absent(what: &'static str) -> impl FnOnce() -> CatalogError {
    move || CatalogError::Contract(format!("cannot convert an absent {what}"))
}
