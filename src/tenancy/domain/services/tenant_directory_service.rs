use async_trait::async_trait;

use crate::tenancy::domain::model::{
    commands::{
        create_tenant_command::CreateTenantCommand,
        reassign_tenant_database_command::ReassignTenantDatabaseCommand,
    },
    entities::tenant::Tenant,
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::tenant_id::TenantId,
};

/// Administrative operations on the tenant catalog, always owner-scoped.
#[async_trait]
pub trait TenantDirectoryService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateTenantCommand,
    ) -> Result<Tenant, TenancyDomainError>;

    /// Change a tenant's physical database. Pooled handles for the old
    /// database are purged and the tenant's cached state is cleared so no
    /// response is served from data cached under the previous database.
    async fn handle_reassign_database(
        &self,
        command: ReassignTenantDatabaseCommand,
    ) -> Result<Tenant, TenancyDomainError>;

    async fn handle_delete(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError>;

    async fn handle_list(&self) -> Result<Vec<Tenant>, TenancyDomainError>;
}
