use async_trait::async_trait;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Opaque session storage collaborator. The only field this crate reads or
/// writes is the tenant binding for a session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str) -> Result<Option<i64>, TenancyDomainError>;

    async fn put(&self, session_id: &str, tenant_id: i64) -> Result<(), TenancyDomainError>;

    async fn has(&self, session_id: &str) -> Result<bool, TenancyDomainError>;
}
