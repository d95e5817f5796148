//! Author aggregate

pub mod model;
pub mod record;
pub mod repository;

pub use model::Author;
pub use record::AuthorRecord;
pub use repository::AuthorRepository;
