use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::tenancy::domain::model::entities::tenant::Tenant;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TenantResource {
    pub id: i64,
    pub name: String,
    pub host: String,
    pub database: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Tenant> for TenantResource {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id().value(),
            name: tenant.name().to_string(),
            host: tenant.host().value().to_string(),
            database: tenant.database().to_string(),
            created_at: tenant.created_at().to_rfc3339(),
            updated_at: tenant.updated_at().to_rfc3339(),
        }
    }
}
