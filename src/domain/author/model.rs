//! Author domain entity

/// An author as the domain sees it.
///
/// Identity is the slug (the natural key); the numeric id is a surrogate
/// assigned by the store and absent until the author is persisted. The two
/// biography fields are independently optional and language-tagged.
///
/// Whether the death year precedes the birth year is left to the
/// declarative validation layer; the entity itself does not constrain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Option<i64>,
    pub name: String,
    pub nationality: String,
    pub biography_es: Option<String>,
    pub biography_en: Option<String>,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub slug: String,
}

impl Author {
    /// Two authors represent the same person when their slugs match.
    pub fn same_person(&self, other: &Author) -> bool {
        self.slug == other.slug
    }
}
