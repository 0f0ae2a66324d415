use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};

use crate::tenancy::{
    domain::{
        model::{
            enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
        },
        services::{
            tenant_context_service::TenantContextService,
            tenant_migration_service::{
                TenantMigrationOutcome, TenantMigrationReport, TenantMigrationService,
            },
        },
    },
    infrastructure::persistence::repositories::{
        tenant_registry_repository::TenantRegistryRepository,
        tenant_schema_migration_repository::TenantSchemaMigrationRepository,
    },
};

pub struct TenantMigrationServiceImpl {
    registry: Arc<dyn TenantRegistryRepository>,
    context_service: Arc<dyn TenantContextService>,
    schema_migrations: Arc<dyn TenantSchemaMigrationRepository>,
    owner_pool: PgPool,
}

impl TenantMigrationServiceImpl {
    pub fn new(
        registry: Arc<dyn TenantRegistryRepository>,
        context_service: Arc<dyn TenantContextService>,
        schema_migrations: Arc<dyn TenantSchemaMigrationRepository>,
        owner_pool: PgPool,
    ) -> Self {
        Self {
            registry,
            context_service,
            schema_migrations,
            owner_pool,
        }
    }
}

#[async_trait]
impl TenantMigrationService for TenantMigrationServiceImpl {
    async fn init_owner_schema(&self) -> Result<(), TenancyDomainError> {
        self.schema_migrations
            .run_owner_migrations(&self.owner_pool)
            .await?;
        info!("owner schema migrated");
        Ok(())
    }

    async fn migrate_one(
        &self,
        tenant_id: TenantId,
        fresh: bool,
        seed: bool,
    ) -> Result<TenantMigrationReport, TenancyDomainError> {
        let tenant = self.context_service.resolve_from_id(tenant_id).await?;
        let context = self.context_service.enter(&tenant).await.map_err(|e| {
            TenancyDomainError::MigrationFailed {
                tenant_id: tenant_id.value(),
                cause: e.to_string(),
            }
        })?;

        info!(
            tenant_id = %tenant_id,
            tenant_name = tenant.name(),
            fresh,
            seed,
            "migrating tenant"
        );

        self.schema_migrations
            .run_tenant_migrations(
                &tenant,
                context.connection().owner_pool(),
                context.connection().pool(),
                fresh,
                seed,
            )
            .await
            .map_err(|e| {
                error!(tenant_id = %tenant_id, error = %e, "tenant migration failed");
                TenancyDomainError::MigrationFailed {
                    tenant_id: tenant_id.value(),
                    cause: e.to_string(),
                }
            })?;

        Ok(TenantMigrationReport {
            tenant_id,
            tenant_name: tenant.name().to_string(),
            fresh,
            seed,
            finished_at: Utc::now(),
        })
    }

    async fn migrate_all(
        &self,
        fresh: bool,
        seed: bool,
    ) -> Result<Vec<TenantMigrationOutcome>, TenancyDomainError> {
        let tenants = self.registry.list_all().await?;
        let mut outcomes = Vec::with_capacity(tenants.len());

        for tenant in tenants {
            let result = self.migrate_one(tenant.id(), fresh, seed).await;
            outcomes.push(TenantMigrationOutcome {
                tenant_id: tenant.id(),
                result,
            });
        }

        Ok(outcomes)
    }
}
