use async_trait::async_trait;

use crate::tenancy::domain::model::{
    commands::create_tenant_command::CreateTenantCommand,
    entities::tenant::Tenant,
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{database_name::DatabaseName, tenant_host::TenantHost, tenant_id::TenantId},
};

/// Owner-database-backed tenant catalog. Reads are unbounded-concurrent;
/// writes to one tenant's routing record are serialized by the impl.
#[async_trait]
pub trait TenantRegistryRepository: Send + Sync {
    async fn find_by_host(&self, host: &TenantHost)
    -> Result<Option<Tenant>, TenancyDomainError>;

    async fn find_by_id(&self, tenant_id: TenantId) -> Result<Option<Tenant>, TenancyDomainError>;

    async fn list_all(&self) -> Result<Vec<Tenant>, TenancyDomainError>;

    /// Insert a tenant record; `DuplicateHost` / `DuplicateDatabase` when a
    /// uniqueness invariant would be violated.
    async fn create(&self, command: &CreateTenantCommand) -> Result<Tenant, TenancyDomainError>;

    /// Point a tenant at a new physical database and return the updated
    /// record. Must not let two writers interleave on the same tenant row.
    async fn reassign_database(
        &self,
        tenant_id: TenantId,
        database: &DatabaseName,
    ) -> Result<Tenant, TenancyDomainError>;

    async fn delete(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError>;
}
