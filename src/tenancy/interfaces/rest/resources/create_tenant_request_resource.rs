use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTenantRequestResource {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 253))]
    pub host: String,

    #[validate(length(min = 3, max = 63), regex(path = "*DATABASE_IDENTIFIER_REGEX"))]
    pub database: String,
}

lazy_static::lazy_static! {
    pub static ref DATABASE_IDENTIFIER_REGEX: regex::Regex = regex::Regex::new("^[a-z][a-z0-9_]{2,62}$").expect("valid regex");
}
