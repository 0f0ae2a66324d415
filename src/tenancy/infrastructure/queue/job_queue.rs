use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Payload key reserved for the tenant stamp. Job bodies own every other
/// key in the payload map.
pub const TENANT_ID_PAYLOAD_KEY: &str = "tenant_id";

/// One queued unit of work as seen by this crate: a type tag for dispatch
/// and a string-keyed payload map. Broker, retry and serialization details
/// belong to the transport behind `JobQueue`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub job_type: String,
    pub payload: Map<String, Value>,
}

impl JobEnvelope {
    pub fn new(job_type: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
            payload: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    pub fn tenant_stamp(&self) -> Option<&Value> {
        self.payload.get(TENANT_ID_PAYLOAD_KEY)
    }
}

/// Transport primitive: hand a job to the queue. Receiving is the worker
/// loop's side of the same transport.
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn enqueue(&self, job: JobEnvelope) -> Result<(), TenancyDomainError>;
}
