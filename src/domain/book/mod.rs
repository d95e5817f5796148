//! Book aggregate
//!
//! Contains the Book entity with its derived price and author-uniqueness
//! guard, the persistence record shape and the repository contract.

pub mod model;
pub mod record;
pub mod repository;

pub use model::Book;
pub use record::BookRecord;
pub use repository::BookRepository;
