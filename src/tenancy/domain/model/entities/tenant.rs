use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{database_name::DatabaseName, tenant_host::TenantHost, tenant_id::TenantId},
};

/// Identity and routing record for one tenant. The `database` field is kept
/// as the raw stored value and revalidated when a connection is activated,
/// so a corrupt registry row surfaces as `UnknownTenant` instead of leaking
/// into a connection string.
#[derive(Clone, Debug)]
pub struct Tenant {
    id: TenantId,
    name: String,
    host: TenantHost,
    database: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tenant {
    pub fn restore(
        id: TenantId,
        name: String,
        host: TenantHost,
        database: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            host,
            database,
            created_at,
            updated_at,
        }
    }

    pub fn reassign_database(&mut self, database: DatabaseName, at: DateTime<Utc>) {
        self.database = database.value().to_string();
        self.updated_at = at;
    }

    /// Parse the stored database identifier for connection activation.
    pub fn database_name(&self) -> Result<DatabaseName, TenancyDomainError> {
        DatabaseName::new(self.database.clone()).map_err(|_| TenancyDomainError::UnknownTenant)
    }

    pub fn id(&self) -> TenantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &TenantHost {
        &self.host
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
