//! Transfer shapes used at the system boundary

pub mod author;
pub mod book;
pub mod publisher;

pub use author::AuthorDto;
pub use book::BookDto;
pub use publisher::PublisherDto;
