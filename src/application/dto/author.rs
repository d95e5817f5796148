//! Author transfer shape

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validations::SLUG_PATTERN;

/// Author shape exchanged with callers at the boundary. Declarative
/// constraints are enforced by [`crate::shared::validations::validate_dto`]
/// before a service trusts an externally-supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthorDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "nationality must not be blank"))]
    pub nationality: String,
    pub biography_es: Option<String>,
    pub biography_en: Option<String>,
    #[validate(range(min = 0, message = "birth year must not be negative"))]
    pub birth_year: i32,
    #[validate(range(min = 0, message = "death year must not be negative"))]
    pub death_year: Option<i32>,
    #[validate(
        length(min = 1, message = "slug must not be blank"),
        regex(
            path = *SLUG_PATTERN,
            message = "slug may only contain lowercase letters, digits and hyphens"
        )
    )]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validations::validate_dto;
    use crate::support::errors::CatalogError;

    fn valid_author() -> AuthorDto {
        AuthorDto {
            id: None,
            name: "Julio Cortázar".to_string(),
            nationality: "Argentina".to_string(),
            biography_es: None,
            biography_en: Some("Argentine novelist".to_string()),
            birth_year: 1914,
            death_year: Some(1984),
            slug: "julio-cortazar".to_string(),
        }
    }

    #[test]
    fn valid_author_passes() {
        assert!(validate_dto(&valid_author()).is_ok());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let dto = AuthorDto {
            name: String::new(),
            birth_year: -1,
            slug: "Not Valid".to_string(),
            ..valid_author()
        };
        let err = validate_dto(&dto).unwrap_err();
        let violations = match err {
            CatalogError::Validation(v) => v,
            other => panic!("expected validation error, got {other:?}"),
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"birth_year"));
        assert!(fields.contains(&"slug"));
    }
}
