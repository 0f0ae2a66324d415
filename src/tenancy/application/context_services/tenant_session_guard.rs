use std::sync::Arc;

use crate::tenancy::{
    domain::model::{entities::tenant::Tenant, enums::tenancy_domain_error::TenancyDomainError},
    infrastructure::session::session_store::SessionStore,
};

/// Binds a client session to exactly one tenant for the session's lifetime.
/// A session bound to tenant A presented on a request resolving to tenant B
/// is rejected before any data access.
pub struct TenantSessionGuard {
    sessions: Arc<dyn SessionStore>,
}

impl TenantSessionGuard {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// `None` session id means a sessionless client; binding only applies
    /// to clients that present one.
    pub async fn authorize(
        &self,
        session_id: Option<&str>,
        tenant: &Tenant,
    ) -> Result<(), TenancyDomainError> {
        let Some(session_id) = session_id else {
            return Ok(());
        };

        if !self.sessions.has(session_id).await? {
            self.sessions.put(session_id, tenant.id().value()).await?;
            return Ok(());
        }

        match self.sessions.get(session_id).await? {
            Some(bound) if bound == tenant.id().value() => Ok(()),
            _ => Err(TenancyDomainError::SessionTenantMismatch),
        }
    }
}
