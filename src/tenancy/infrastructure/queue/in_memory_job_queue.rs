use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::queue::job_queue::{JobEnvelope, JobQueue},
};

/// Channel-backed queue for tests and the demo worker. A real deployment
/// plugs a broker-backed `JobQueue` in instead.
pub struct InMemoryJobQueue {
    sender: mpsc::UnboundedSender<JobEnvelope>,
    receiver: Mutex<mpsc::UnboundedReceiver<JobEnvelope>>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Mutex::new(receiver),
        }
    }

    /// Worker-side receive primitive. `None` once every sender is gone.
    pub async fn receive(&self) -> Option<JobEnvelope> {
        self.receiver.lock().await.recv().await
    }

    pub fn try_receive(&self) -> Option<JobEnvelope> {
        self.receiver.try_lock().ok()?.try_recv().ok()
    }
}

impl Default for InMemoryJobQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn enqueue(&self, job: JobEnvelope) -> Result<(), TenancyDomainError> {
        self.sender
            .send(job)
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))
    }
}
