use async_trait::async_trait;
use sqlx::{PgPool, migrate::Migrator};

use crate::tenancy::{
    domain::model::{entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError},
    infrastructure::persistence::repositories::tenant_schema_migration_repository::TenantSchemaMigrationRepository,
};

static OWNER_MIGRATOR: Migrator = sqlx::migrate!("./migrations/owner");
static TENANT_MIGRATOR: Migrator = sqlx::migrate!("./migrations/tenant");

const TENANT_SEED_SQL: &str = include_str!("../../../../../../migrations/tenant_seed.sql");

pub struct SqlxTenantSchemaMigrationRepositoryImpl;

impl SqlxTenantSchemaMigrationRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlxTenantSchemaMigrationRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantSchemaMigrationRepository for SqlxTenantSchemaMigrationRepositoryImpl {
    async fn run_owner_migrations(&self, owner_pool: &PgPool) -> Result<(), TenancyDomainError> {
        OWNER_MIGRATOR
            .run(owner_pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))
    }

    async fn run_tenant_migrations(
        &self,
        tenant: &Tenant,
        owner_pool: &PgPool,
        tenant_pool: &PgPool,
        fresh: bool,
        seed: bool,
    ) -> Result<(), TenancyDomainError> {
        let mut transaction = owner_pool.begin().await.map_err(map_infra_error)?;

        sqlx::query(
            r#"
            INSERT INTO tenant_migration_runs (tenant_id, fresh, seed, started_at)
            VALUES ($1, $2, $3, NOW())
            "#,
        )
        .bind(tenant.id().value())
        .bind(fresh)
        .bind(seed)
        .execute(&mut *transaction)
        .await
        .map_err(map_infra_error)?;

        let outcome = Self::apply(tenant_pool, fresh, seed).await;

        match outcome {
            Ok(()) => {
                sqlx::query(
                    r#"
                    UPDATE tenant_migration_runs
                    SET finished_at = NOW()
                    WHERE tenant_id = $1 AND finished_at IS NULL
                    "#,
                )
                .bind(tenant.id().value())
                .execute(&mut *transaction)
                .await
                .map_err(map_infra_error)?;

                transaction.commit().await.map_err(map_infra_error)?;
                Ok(())
            }
            Err(error) => {
                // Best effort: the bookkeeping row rolls back, applied DDL
                // on the tenant side does not.
                transaction.rollback().await.ok();
                Err(error)
            }
        }
    }
}

impl SqlxTenantSchemaMigrationRepositoryImpl {
    async fn apply(
        tenant_pool: &PgPool,
        fresh: bool,
        seed: bool,
    ) -> Result<(), TenancyDomainError> {
        if fresh {
            sqlx::raw_sql("DROP SCHEMA public CASCADE; CREATE SCHEMA public;")
                .execute(tenant_pool)
                .await
                .map_err(map_infra_error)?;
        }

        TENANT_MIGRATOR
            .run(tenant_pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if seed {
            sqlx::raw_sql(TENANT_SEED_SQL)
                .execute(tenant_pool)
                .await
                .map_err(map_infra_error)?;
        }

        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> TenancyDomainError {
    TenancyDomainError::InfrastructureError(error.to_string())
}
