use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    tenancy::{
        domain::model::{
            entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError,
        },
        infrastructure::{
            connection::active_connection::ActiveConnection,
            persistence::repositories::tenant_pool_cache_repository::TenantPoolCacheRepository,
        },
    },
};

/// Owns every change to an execution context's `ActiveConnection`. Pools are
/// shared across contexts through the pool cache, keyed by database name, so
/// a handle opened for one database can never serve another.
pub struct ConnectionRouter {
    owner_pool: PgPool,
    pool_cache: Arc<dyn TenantPoolCacheRepository>,
    config: AppConfig,
}

impl ConnectionRouter {
    pub fn new(
        owner_pool: PgPool,
        pool_cache: Arc<dyn TenantPoolCacheRepository>,
        config: AppConfig,
    ) -> Self {
        Self {
            owner_pool,
            pool_cache,
            config,
        }
    }

    /// Fresh context-local connection state targeting the owner database.
    /// Every new execution context starts here; nothing from the previous
    /// request or job survives into the returned value.
    pub fn activate_owner(&self) -> ActiveConnection {
        ActiveConnection::owner(self.owner_pool.clone())
    }

    /// Retarget this context's tenant connection at `tenant`'s database.
    /// Refuses with `UnknownTenant` when the stored database identifier is
    /// empty or malformed; there is no fallback to the owner connection.
    /// Does not select the tenant connection for query routing, that is
    /// `use_tenant`.
    pub async fn activate_tenant(
        &self,
        connection: &mut ActiveConnection,
        tenant: &Tenant,
    ) -> Result<(), TenancyDomainError> {
        let database = tenant.database_name()?;

        if let Some(previous) = connection.tenant_database() {
            if previous != database.value() {
                let stale = previous.to_string();
                connection.clear_tenant();
                self.pool_cache.purge(&stale).await;
            }
        }

        let url = self.config.database_url_for(database.value());
        let pool = self
            .pool_cache
            .get_or_create_pool(database.value(), &url)
            .await?;

        connection.set_tenant(database.value().to_string(), pool);
        Ok(())
    }

    /// Select the tenant connection configured by `activate_tenant` as the
    /// default target for data operations in this context.
    pub fn use_tenant(&self, connection: &mut ActiveConnection) -> Result<(), TenancyDomainError> {
        if !connection.select_tenant() {
            return Err(TenancyDomainError::UnknownTenant);
        }
        Ok(())
    }
}
