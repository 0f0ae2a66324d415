use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{database_name::DatabaseName, tenant_host::TenantHost},
};

pub struct CreateTenantCommand {
    name: String,
    host: TenantHost,
    database: DatabaseName,
}

impl CreateTenantCommand {
    pub fn new(name: String, host: String, database: String) -> Result<Self, TenancyDomainError> {
        Ok(Self {
            name: name.trim().to_string(),
            host: TenantHost::new(host)?,
            database: DatabaseName::new(database)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &TenantHost {
        &self.host
    }

    pub fn database(&self) -> &DatabaseName {
        &self.database
    }
}
