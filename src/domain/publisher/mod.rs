//! Publisher aggregate

pub mod model;
pub mod record;
pub mod repository;

pub use model::Publisher;
pub use record::PublisherRecord;
pub use repository::PublisherRepository;
