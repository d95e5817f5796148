//! Publisher transfer shape

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validations::SLUG_PATTERN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PublisherDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "slug must not be blank"),
        regex(
            path = *SLUG_PATTERN,
            message = "slug may only contain lowercase letters, digits and hyphens"
        )
    )]
    pub slug: String,
}
