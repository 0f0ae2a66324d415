use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::{
        connection::tenant_context::TenantContext,
        queue::job_queue::{JobEnvelope, JobQueue, TENANT_ID_PAYLOAD_KEY},
    },
    application::queue_services::job_context_propagator::JobContextPropagator,
};

/// A job body. Tenant-stamped jobs receive the re-established context;
/// owner-context jobs receive `None`.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn handle(
        &self,
        job: &JobEnvelope,
        context: Option<&TenantContext>,
    ) -> Result<(), TenancyDomainError>;
}

/// Enqueue-side wrapper over the transport: every job going out is stamped
/// with the tenant active at submission time.
pub struct TenantAwareJobQueue {
    transport: Arc<dyn JobQueue>,
    propagator: Arc<JobContextPropagator>,
}

impl TenantAwareJobQueue {
    pub fn new(transport: Arc<dyn JobQueue>, propagator: Arc<JobContextPropagator>) -> Self {
        Self {
            transport,
            propagator,
        }
    }

    pub async fn enqueue(
        &self,
        mut job: JobEnvelope,
        active: Option<&TenantContext>,
    ) -> Result<(), TenancyDomainError> {
        // The stamp key is reserved; whatever the job body put there is
        // replaced by the actual execution context.
        job.payload.remove(TENANT_ID_PAYLOAD_KEY);
        job.payload.extend(self.propagator.stamp(active));
        self.transport.enqueue(job).await
    }
}

/// Worker-side choke point: full context establishment runs for every
/// received job, so a worker that just executed tenant A's job never leaks
/// A's context into the next one.
pub struct TenantJobDispatcher {
    propagator: Arc<JobContextPropagator>,
}

impl TenantJobDispatcher {
    pub fn new(propagator: Arc<JobContextPropagator>) -> Self {
        Self { propagator }
    }

    pub async fn dispatch(
        &self,
        job: &JobEnvelope,
        handler: &dyn JobHandler,
    ) -> Result<(), TenancyDomainError> {
        let context = match self.propagator.restore(&job.payload).await {
            Ok(context) => context,
            Err(restore_error) => {
                error!(
                    job_type = job.job_type,
                    error = %restore_error,
                    "job failed before execution: tenant context could not be restored"
                );
                return Err(restore_error);
            }
        };

        debug!(
            job_type = job.job_type,
            tenant_id = context.as_ref().map(|c| c.tenant().id().value()),
            "dispatching job"
        );
        handler.handle(job, context.as_ref()).await
    }
}
