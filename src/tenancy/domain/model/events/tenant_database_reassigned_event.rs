use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::value_objects::tenant_id::TenantId;

/// Emitted after a tenant's routing record points at a new physical
/// database. Consumers must treat every pooled handle and cached entry for
/// the previous database as stale.
#[derive(Clone, Debug)]
pub struct TenantDatabaseReassignedEvent {
    pub tenant_id: TenantId,
    pub previous_database: String,
    pub new_database: String,
    pub occurred_at: DateTime<Utc>,
}

impl TenantDatabaseReassignedEvent {
    pub fn new(
        tenant_id: TenantId,
        previous_database: String,
        new_database: String,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            previous_database,
            new_database,
            occurred_at,
        }
    }
}
