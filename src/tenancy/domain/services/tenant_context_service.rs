use async_trait::async_trait;

use crate::tenancy::{
    domain::model::{
        entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError,
        value_objects::tenant_id::TenantId,
    },
    infrastructure::connection::tenant_context::TenantContext,
};

/// Resolves which tenant an inbound unit of work belongs to and enters that
/// tenant's context. `enter` is the single choke point: no component mutates
/// connection state without going through it.
#[async_trait]
pub trait TenantContextService: Send + Sync {
    /// Exact-match lookup by request host. `TenantNotFound` is a hard
    /// failure, never a soft default to the owner context.
    async fn resolve_from_host(&self, host: &str) -> Result<Tenant, TenancyDomainError>;

    async fn resolve_from_id(&self, tenant_id: TenantId) -> Result<Tenant, TenancyDomainError>;

    /// Retarget the connection at the tenant's database, select it for data
    /// operations and scope cache writes to the tenant. Idempotent in
    /// effect: re-entering the same tenant yields the same end state.
    async fn enter(&self, tenant: &Tenant) -> Result<TenantContext, TenancyDomainError>;
}
