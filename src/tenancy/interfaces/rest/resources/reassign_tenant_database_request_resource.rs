use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::create_tenant_request_resource::DATABASE_IDENTIFIER_REGEX;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ReassignTenantDatabaseRequestResource {
    #[validate(length(min = 3, max = 63), regex(path = "*DATABASE_IDENTIFIER_REGEX"))]
    pub database: String,
}
