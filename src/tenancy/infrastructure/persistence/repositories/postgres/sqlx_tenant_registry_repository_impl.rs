use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::tenancy::{
    domain::model::{
        commands::create_tenant_command::CreateTenantCommand,
        entities::tenant::Tenant,
        enums::tenancy_domain_error::TenancyDomainError,
        value_objects::{
            database_name::DatabaseName, tenant_host::TenantHost, tenant_id::TenantId,
        },
    },
    infrastructure::persistence::repositories::tenant_registry_repository::TenantRegistryRepository,
};

pub struct SqlxTenantRegistryRepositoryImpl {
    owner_pool: PgPool,
}

impl SqlxTenantRegistryRepositoryImpl {
    pub fn new(owner_pool: PgPool) -> Self {
        Self { owner_pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Tenant, TenancyDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let name: String = row.try_get("name").map_err(map_infra_error)?;
        let host_raw: String = row.try_get("host").map_err(map_infra_error)?;
        let database: String = row.try_get("database_name").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        Ok(Tenant::restore(
            TenantId::new(id)?,
            name,
            TenantHost::new(host_raw)?,
            database,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl TenantRegistryRepository for SqlxTenantRegistryRepositoryImpl {
    async fn find_by_host(
        &self,
        host: &TenantHost,
    ) -> Result<Option<Tenant>, TenancyDomainError> {
        let statement = r#"
            SELECT id, name, host, database_name, created_at, updated_at
            FROM tenants
            WHERE host = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(host.value())
            .fetch_optional(&self.owner_pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_id(&self, tenant_id: TenantId) -> Result<Option<Tenant>, TenancyDomainError> {
        let statement = r#"
            SELECT id, name, host, database_name, created_at, updated_at
            FROM tenants
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(tenant_id.value())
            .fetch_optional(&self.owner_pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Tenant>, TenancyDomainError> {
        let statement = r#"
            SELECT id, name, host, database_name, created_at, updated_at
            FROM tenants
            ORDER BY id
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.owner_pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn create(&self, command: &CreateTenantCommand) -> Result<Tenant, TenancyDomainError> {
        let statement = r#"
            INSERT INTO tenants (name, host, database_name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, name, host, database_name, created_at, updated_at
        "#;

        let row = sqlx::query(statement)
            .bind(command.name())
            .bind(command.host().value())
            .bind(command.database().value())
            .fetch_one(&self.owner_pool)
            .await
            .map_err(map_write_error)?;

        Self::row_to_entity(row)
    }

    async fn reassign_database(
        &self,
        tenant_id: TenantId,
        database: &DatabaseName,
    ) -> Result<Tenant, TenancyDomainError> {
        let mut transaction = self.owner_pool.begin().await.map_err(map_infra_error)?;

        // Row lock serializes concurrent writers on the same tenant so a
        // reader never observes a half-updated routing record.
        let locked = sqlx::query("SELECT id FROM tenants WHERE id = $1 FOR UPDATE")
            .bind(tenant_id.value())
            .fetch_optional(&mut *transaction)
            .await
            .map_err(map_infra_error)?;

        if locked.is_none() {
            return Err(TenancyDomainError::TenantNotFound);
        }

        let statement = r#"
            UPDATE tenants
            SET database_name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, host, database_name, created_at, updated_at
        "#;

        let row = sqlx::query(statement)
            .bind(tenant_id.value())
            .bind(database.value())
            .fetch_one(&mut *transaction)
            .await
            .map_err(map_write_error)?;

        transaction.commit().await.map_err(map_infra_error)?;
        Self::row_to_entity(row)
    }

    async fn delete(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(tenant_id.value())
            .execute(&self.owner_pool)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(TenancyDomainError::TenantNotFound);
        }
        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> TenancyDomainError {
    TenancyDomainError::InfrastructureError(error.to_string())
}

fn map_write_error(error: sqlx::Error) -> TenancyDomainError {
    if let Some(database_error) = error.as_database_error() {
        match database_error.constraint() {
            Some("tenants_host_key") => return TenancyDomainError::DuplicateHost,
            Some("tenants_database_name_key") => return TenancyDomainError::DuplicateDatabase,
            _ => {}
        }
    }
    map_infra_error(error)
}
