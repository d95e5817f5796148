//! # Libroteca catalog core
//!
//! Domain and service core of a book-catalog backend managing books,
//! authors and publishers.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: entities with their invariants (the book's derived final
//!   price, the duplicate-author guard), persistence record shapes and
//!   repository contracts
//! - **application**: transfer shapes, the conversion layer between the
//!   three representations, and the per-entity services
//! - **shared**: pagination and the declarative validation entry point
//! - **support**: the error taxonomy
//!
//! Data flows inbound as Transfer → Domain → Record → repository write,
//! and outbound as repository read → Record → Domain → Transfer. The
//! persistence mechanism itself and the transport layer are consumers of
//! this crate, not part of it.

pub mod application;
pub mod domain;
pub mod shared;
pub mod support;

pub use application::{AuthorDto, AuthorService, BookDto, BookService, PublisherDto, PublisherService};
pub use domain::{
    Author, AuthorRecord, AuthorRepository, Book, BookRecord, BookRepository, Publisher,
    PublisherRecord, PublisherRepository,
};
pub use shared::types::PageRequest;
pub use support::errors::{CatalogError, CatalogResult, FieldViolation};
