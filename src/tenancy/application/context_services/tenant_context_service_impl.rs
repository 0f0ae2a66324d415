use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::tenancy::{
    domain::{
        model::{
            entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError,
            value_objects::{tenant_host::TenantHost, tenant_id::TenantId},
        },
        services::tenant_context_service::TenantContextService,
    },
    infrastructure::{
        cache::tenant_cache_isolator::TenantCacheIsolator,
        connection::{connection_router::ConnectionRouter, tenant_context::TenantContext},
        persistence::repositories::tenant_registry_repository::TenantRegistryRepository,
    },
};

pub struct TenantContextServiceImpl {
    registry: Arc<dyn TenantRegistryRepository>,
    router: Arc<ConnectionRouter>,
    cache_isolator: Arc<TenantCacheIsolator>,
}

impl TenantContextServiceImpl {
    pub fn new(
        registry: Arc<dyn TenantRegistryRepository>,
        router: Arc<ConnectionRouter>,
        cache_isolator: Arc<TenantCacheIsolator>,
    ) -> Self {
        Self {
            registry,
            router,
            cache_isolator,
        }
    }
}

#[async_trait]
impl TenantContextService for TenantContextServiceImpl {
    async fn resolve_from_host(&self, host: &str) -> Result<Tenant, TenancyDomainError> {
        let host = TenantHost::new(host.to_string())
            .map_err(|_| TenancyDomainError::TenantNotFound)?;

        self.registry
            .find_by_host(&host)
            .await?
            .ok_or(TenancyDomainError::TenantNotFound)
    }

    async fn resolve_from_id(&self, tenant_id: TenantId) -> Result<Tenant, TenancyDomainError> {
        self.registry
            .find_by_id(tenant_id)
            .await?
            .ok_or(TenancyDomainError::TenantNotFound)
    }

    async fn enter(&self, tenant: &Tenant) -> Result<TenantContext, TenancyDomainError> {
        let mut connection = self.router.activate_owner();
        self.router.activate_tenant(&mut connection, tenant).await?;
        self.router.use_tenant(&mut connection)?;

        let cache = self.cache_isolator.scope_to(tenant.id());

        debug!(tenant_id = %tenant.id(), database = tenant.database(), "tenant context entered");
        Ok(TenantContext::new(tenant.clone(), connection, cache))
    }
}
