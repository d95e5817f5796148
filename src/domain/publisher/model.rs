//! Publisher domain entity

/// A publisher: surrogate id (absent until persisted), display name and
/// the slug that acts as its natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
}
