use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::tenancy::{
    domain::{
        model::{
            commands::{
                create_tenant_command::CreateTenantCommand,
                reassign_tenant_database_command::ReassignTenantDatabaseCommand,
            },
            entities::tenant::Tenant,
            enums::tenancy_domain_error::TenancyDomainError,
            events::tenant_database_reassigned_event::TenantDatabaseReassignedEvent,
            value_objects::tenant_id::TenantId,
        },
        services::tenant_directory_service::TenantDirectoryService,
    },
    infrastructure::{
        cache::tenant_cache_isolator::TenantCacheIsolator,
        persistence::repositories::{
            tenant_pool_cache_repository::TenantPoolCacheRepository,
            tenant_registry_repository::TenantRegistryRepository,
        },
    },
};

pub struct TenantDirectoryServiceImpl {
    registry: Arc<dyn TenantRegistryRepository>,
    pool_cache: Arc<dyn TenantPoolCacheRepository>,
    cache_isolator: Arc<TenantCacheIsolator>,
}

impl TenantDirectoryServiceImpl {
    pub fn new(
        registry: Arc<dyn TenantRegistryRepository>,
        pool_cache: Arc<dyn TenantPoolCacheRepository>,
        cache_isolator: Arc<TenantCacheIsolator>,
    ) -> Self {
        Self {
            registry,
            pool_cache,
            cache_isolator,
        }
    }

    /// Cache clearing is best effort relative to connection correctness:
    /// a failure is reported, never swallowed, and never blocks the switch.
    async fn clear_tenant_cache(&self, tenant_id: TenantId) {
        if let Err(cache_error) = self.cache_isolator.clear_tenant(tenant_id).await {
            error!(
                tenant_id = %tenant_id,
                error = %cache_error,
                "failed to clear tenant cache after routing change"
            );
        }
    }
}

#[async_trait]
impl TenantDirectoryService for TenantDirectoryServiceImpl {
    async fn handle_create(
        &self,
        command: CreateTenantCommand,
    ) -> Result<Tenant, TenancyDomainError> {
        let tenant = self.registry.create(&command).await?;
        info!(tenant_id = %tenant.id(), host = tenant.host().value(), "tenant created");
        Ok(tenant)
    }

    async fn handle_reassign_database(
        &self,
        command: ReassignTenantDatabaseCommand,
    ) -> Result<Tenant, TenancyDomainError> {
        let current = self
            .registry
            .find_by_id(command.tenant_id())
            .await?
            .ok_or(TenancyDomainError::TenantNotFound)?;
        let previous_database = current.database().to_string();

        let updated = self
            .registry
            .reassign_database(command.tenant_id(), command.database())
            .await?;

        // Pooled handles for the old database must never serve the tenant
        // again; purge before anything else can re-resolve the tenant.
        self.pool_cache.purge(&previous_database).await;
        self.clear_tenant_cache(updated.id()).await;

        let event = TenantDatabaseReassignedEvent::new(
            updated.id(),
            previous_database,
            updated.database().to_string(),
            Utc::now(),
        );
        info!(
            tenant_id = %event.tenant_id,
            previous = event.previous_database,
            new = event.new_database,
            "tenant database reassigned"
        );

        Ok(updated)
    }

    async fn handle_delete(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError> {
        let tenant = self
            .registry
            .find_by_id(tenant_id)
            .await?
            .ok_or(TenancyDomainError::TenantNotFound)?;

        self.clear_tenant_cache(tenant_id).await;
        self.pool_cache.purge(tenant.database()).await;
        self.registry.delete(tenant_id).await?;

        info!(tenant_id = %tenant_id, "tenant deleted");
        Ok(())
    }

    async fn handle_list(&self) -> Result<Vec<Tenant>, TenancyDomainError> {
        self.registry.list_all().await
    }
}
