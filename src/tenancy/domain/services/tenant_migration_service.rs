use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct TenantMigrationReport {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub fresh: bool,
    pub seed: bool,
    pub finished_at: DateTime<Utc>,
}

/// Per-tenant result of a batch run. Failures stay attached to their tenant
/// instead of aborting the batch.
pub struct TenantMigrationOutcome {
    pub tenant_id: TenantId,
    pub result: Result<TenantMigrationReport, TenancyDomainError>,
}

#[async_trait]
pub trait TenantMigrationService: Send + Sync {
    /// One-time owner bootstrap (tenant catalog, run bookkeeping).
    /// Re-running on an already-migrated owner schema is a no-op.
    async fn init_owner_schema(&self) -> Result<(), TenancyDomainError>;

    async fn migrate_one(
        &self,
        tenant_id: TenantId,
        fresh: bool,
        seed: bool,
    ) -> Result<TenantMigrationReport, TenancyDomainError>;

    /// Migrate every registered tenant; one tenant's failure never prevents
    /// the next tenant from being attempted.
    async fn migrate_all(
        &self,
        fresh: bool,
        seed: bool,
    ) -> Result<Vec<TenantMigrationOutcome>, TenancyDomainError>;
}
