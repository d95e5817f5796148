//! Author persistence record

/// Immutable data shape read from and written to the author store,
/// mirroring the domain fields one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: Option<i64>,
    pub name: String,
    pub nationality: String,
    pub biography_es: Option<String>,
    pub biography_en: Option<String>,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub slug: String,
}
