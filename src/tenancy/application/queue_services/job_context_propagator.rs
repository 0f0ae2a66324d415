use std::sync::Arc;

use serde_json::{Map, Value};

use crate::tenancy::{
    domain::{
        model::{
            enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
        },
        services::tenant_context_service::TenantContextService,
    },
    infrastructure::{
        connection::tenant_context::TenantContext,
        queue::job_queue::TENANT_ID_PAYLOAD_KEY,
    },
};

/// Carries tenant identity across the job-queue process boundary: the
/// enqueue side stamps the currently active tenant into the payload, the
/// worker side re-establishes that tenant's context before the job body
/// runs.
pub struct JobContextPropagator {
    context_service: Arc<dyn TenantContextService>,
}

impl JobContextPropagator {
    pub fn new(context_service: Arc<dyn TenantContextService>) -> Self {
        Self { context_service }
    }

    /// Payload fragment for the execution context the job is enqueued from.
    /// Owner-context jobs carry no stamp.
    pub fn stamp(&self, active: Option<&TenantContext>) -> Map<String, Value> {
        let mut fragment = Map::new();
        if let Some(context) = active {
            fragment.insert(
                TENANT_ID_PAYLOAD_KEY.to_string(),
                Value::from(context.tenant().id().value()),
            );
        }
        fragment
    }

    /// Worker side. The caller's execution context starts with no tenant
    /// active; an absent stamp keeps it that way. A stamp for a tenant that
    /// no longer resolves fails the job before its body runs, leaving retry
    /// or dead-lettering to the transport.
    pub async fn restore(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Option<TenantContext>, TenancyDomainError> {
        let Some(stamp) = payload.get(TENANT_ID_PAYLOAD_KEY) else {
            return Ok(None);
        };

        let raw = stamp
            .as_i64()
            .ok_or(TenancyDomainError::InvalidPayloadStamp)?;
        let tenant_id = TenantId::new(raw).map_err(|_| TenancyDomainError::InvalidPayloadStamp)?;

        let tenant = self.context_service.resolve_from_id(tenant_id).await?;
        let context = self.context_service.enter(&tenant).await?;
        Ok(Some(context))
    }
}
