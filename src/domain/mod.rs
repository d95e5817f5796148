pub mod author;
pub mod book;
pub mod publisher;

// Re-export commonly used types
pub use author::{Author, AuthorRecord, AuthorRepository};
pub use book::{Book, BookRecord, BookRepository};
pub use publisher::{Publisher, PublisherRecord, PublisherRepository};

// Re-export the error types from support for convenience
pub use crate::support::errors::{CatalogError, CatalogResult};
