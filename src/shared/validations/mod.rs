//! Declarative validation entry point.
//!
//! Transfer shapes carry `validator` derive annotations; services run
//! [`validate_dto`] on externally-supplied DTOs before trusting them.
//! Validation failures surface every violated field, not just the first.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::support::errors::{CatalogError, CatalogResult, FieldViolation};

/// Slugs are URL-safe: lowercase letters, digits and hyphens only.
pub static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9-]+$").expect("slug pattern compiles"));

/// ISBNs are exactly 13 digits, no separators.
pub static ISBN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{13}$").expect("isbn pattern compiles"));

/// Runs declarative constraint checks against a transfer object and maps
/// the outcome into the catalog error taxonomy.
pub fn validate_dto<T: Validate>(dto: &T) -> CatalogResult<()> {
    dto.validate()
        .map_err(|errors| CatalogError::Validation(collect_violations(&errors)))
}

/// Flattens `validator`'s nested error tree into (field path, message)
/// pairs. Nested structs contribute dotted paths (`publisher.slug`) and
/// lists contribute indexed paths (`authors[0].name`).
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    flatten("", errors, &mut violations);
    violations
}

fn flatten(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(&path, nested, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

/// Prices must not be negative. `validator`'s `range` rule only covers
/// primitive numbers, so decimals get a custom check.
pub fn validate_non_negative_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("price_negative");
        error.message = Some("price must not be negative".into());
        return Err(error);
    }
    Ok(())
}

/// Discount percentages live in [0, 100].
pub fn validate_discount_percentage(value: &Decimal) -> Result<(), ValidationError> {
    if (value.is_sign_negative() && !value.is_zero()) || *value > Decimal::ONE_HUNDRED {
        let mut error = ValidationError::new("discount_out_of_range");
        error.message = Some("discount percentage must be between 0 and 100".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "name must not be blank"))]
        name: String,
    }

    #[derive(Debug, Validate)]
    struct Outer {
        #[validate(regex(path = *SLUG_PATTERN, message = "bad slug"))]
        slug: String,
        #[validate(range(min = 0, message = "year must not be negative"))]
        year: i32,
        #[validate(nested)]
        inner: Inner,
        #[validate(nested)]
        entries: Vec<Inner>,
    }

    #[test]
    fn collects_every_violation_with_paths() {
        let outer = Outer {
            slug: "Not A Slug".to_string(),
            year: -3,
            inner: Inner {
                name: String::new(),
            },
            entries: vec![
                Inner {
                    name: "ok".to_string(),
                },
                Inner {
                    name: String::new(),
                },
            ],
        };

        let err = validate_dto(&outer).unwrap_err();
        let violations = match err {
            CatalogError::Validation(violations) => violations,
            other => panic!("expected validation error, got {other:?}"),
        };

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"year"));
        assert!(fields.contains(&"inner.name"));
        assert!(fields.contains(&"entries[1].name"));
        assert_eq!(violations.len(), 4);
    }

    #[test]
    fn valid_dto_passes() {
        let outer = Outer {
            slug: "a-valid-slug-42".to_string(),
            year: 1927,
            inner: Inner {
                name: "x".to_string(),
            },
            entries: vec![],
        };
        assert!(validate_dto(&outer).is_ok());
    }

    #[test]
    fn slug_pattern_rejects_uppercase_and_spaces() {
        assert!(SLUG_PATTERN.is_match("gabriel-garcia-marquez"));
        assert!(!SLUG_PATTERN.is_match("Gabriel"));
        assert!(!SLUG_PATTERN.is_match("with space"));
        assert!(!SLUG_PATTERN.is_match(""));
    }

    #[test]
    fn isbn_pattern_requires_thirteen_digits() {
        assert!(ISBN_PATTERN.is_match("9780307474728"));
        assert!(!ISBN_PATTERN.is_match("978-030747472"));
        assert!(!ISBN_PATTERN.is_match("97803074747"));
    }

    #[test]
    fn decimal_validators() {
        let negative: Decimal = "-0.01".parse().unwrap();
        let valid: Decimal = "19.95".parse().unwrap();
        let over: Decimal = "100.5".parse().unwrap();

        assert!(validate_non_negative_price(&negative).is_err());
        assert!(validate_non_negative_price(&valid).is_ok());
        assert!(validate_discount_percentage(&over).is_err());
        assert!(validate_discount_percentage(&Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_discount_percentage(&Decimal::ZERO).is_ok());
    }
}
