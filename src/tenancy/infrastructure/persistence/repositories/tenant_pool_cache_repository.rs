use async_trait::async_trait;
use sqlx::PgPool;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Process-wide cache of connection pools, one per physical database.
#[async_trait]
pub trait TenantPoolCacheRepository: Send + Sync {
    async fn get_or_create_pool(
        &self,
        database_name: &str,
        database_url: &str,
    ) -> Result<PgPool, TenancyDomainError>;

    /// Drop the cached pool for a database so the next activation opens a
    /// fresh one. Contexts already holding the pool keep their handle; they
    /// can only ever reach the database it was opened for.
    async fn purge(&self, database_name: &str);
}
