use crate::tenancy::{
    domain::model::entities::tenant::Tenant,
    infrastructure::{
        cache::tenant_cache_isolator::TenantCacheScope,
        connection::active_connection::ActiveConnection,
    },
};

/// Everything one execution context needs once a tenant has been entered:
/// the resolved tenant, the retargeted connection and the scoped cache
/// handle. Built only by `TenantContextService::enter` and threaded through
/// the request (as an axum extension) or the job dispatch explicitly.
#[derive(Clone)]
pub struct TenantContext {
    tenant: Tenant,
    connection: ActiveConnection,
    cache: TenantCacheScope,
}

impl TenantContext {
    pub(crate) fn new(tenant: Tenant, connection: ActiveConnection, cache: TenantCacheScope) -> Self {
        Self {
            tenant,
            connection,
            cache,
        }
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    pub fn connection(&self) -> &ActiveConnection {
        &self.connection
    }

    pub fn cache(&self) -> &TenantCacheScope {
        &self.cache
    }
}
