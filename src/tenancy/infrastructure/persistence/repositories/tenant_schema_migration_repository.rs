use async_trait::async_trait;
use sqlx::PgPool;

use crate::tenancy::domain::model::{
    entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError,
};

/// Applies embedded migration sets. Schema work sits behind this trait so
/// the batch orchestration in the migration service stays testable without
/// a live cluster.
#[async_trait]
pub trait TenantSchemaMigrationRepository: Send + Sync {
    /// Bring the owner schema (tenant catalog, run bookkeeping) up to date.
    /// Safe to re-run; an already-migrated owner schema is a no-op.
    async fn run_owner_migrations(&self, owner_pool: &PgPool) -> Result<(), TenancyDomainError>;

    /// Migrate one tenant's database, optionally dropping and recreating
    /// the schema first (`fresh`) and applying seed data afterwards. Run
    /// bookkeeping is transactional on the owner connection; the tenant-side
    /// DDL itself is not, so a failure can leave the tenant schema partially
    /// migrated while the bookkeeping row rolls back cleanly.
    async fn run_tenant_migrations(
        &self,
        tenant: &Tenant,
        owner_pool: &PgPool,
        tenant_pool: &PgPool,
        fresh: bool,
        seed: bool,
    ) -> Result<(), TenancyDomainError>;
}
