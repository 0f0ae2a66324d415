use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{database_name::DatabaseName, tenant_id::TenantId},
};

pub struct ReassignTenantDatabaseCommand {
    tenant_id: TenantId,
    database: DatabaseName,
}

impl ReassignTenantDatabaseCommand {
    pub fn new(tenant_id: i64, database: String) -> Result<Self, TenancyDomainError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            database: DatabaseName::new(database)?,
        })
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn database(&self) -> &DatabaseName {
        &self.database
    }
}
