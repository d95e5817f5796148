//! Publisher persistence record

/// Immutable data shape exchanged with the publisher store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherRecord {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
}
