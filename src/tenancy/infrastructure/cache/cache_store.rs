use async_trait::async_trait;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Generic key-value cache collaborator. Production deployments bring their
/// own store (Redis, memcached); the crate only depends on this surface.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, TenancyDomainError>;

    async fn put(&self, key: &str, value: String) -> Result<(), TenancyDomainError>;

    async fn forget(&self, key: &str) -> Result<(), TenancyDomainError>;

    async fn has(&self, key: &str) -> Result<bool, TenancyDomainError>;
}
