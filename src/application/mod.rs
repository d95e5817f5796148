pub mod dto;
pub mod mappers;
pub mod services;

// Re-export key types for convenience
pub use dto::{AuthorDto, BookDto, PublisherDto};
pub use services::{AuthorService, BookService, PublisherService};
