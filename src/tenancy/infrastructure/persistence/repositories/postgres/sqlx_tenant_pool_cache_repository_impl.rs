use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::persistence::repositories::tenant_pool_cache_repository::TenantPoolCacheRepository,
};

pub struct SqlxTenantPoolCacheRepositoryImpl {
    pools: Arc<RwLock<HashMap<String, PgPool>>>,
}

impl SqlxTenantPoolCacheRepositoryImpl {
    pub fn new() -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for SqlxTenantPoolCacheRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantPoolCacheRepository for SqlxTenantPoolCacheRepositoryImpl {
    async fn get_or_create_pool(
        &self,
        database_name: &str,
        database_url: &str,
    ) -> Result<PgPool, TenancyDomainError> {
        {
            let read_guard = self.pools.read().await;
            if let Some(pool) = read_guard.get(database_name) {
                return Ok(pool.clone());
            }
        }

        // Lazy connect keeps activation non-blocking; the first query opens
        // the actual connection.
        let pool = PgPool::connect_lazy(database_url)
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        let mut write_guard = self.pools.write().await;
        if let Some(existing) = write_guard.get(database_name) {
            return Ok(existing.clone());
        }

        write_guard.insert(database_name.to_string(), pool.clone());
        Ok(pool)
    }

    async fn purge(&self, database_name: &str) {
        self.pools.write().await.remove(database_name);
    }
}
