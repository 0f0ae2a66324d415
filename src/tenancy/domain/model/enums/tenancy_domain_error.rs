use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyDomainError {
    #[error("tenant id must be a positive integer")]
    InvalidTenantId,

    #[error("tenant host name is invalid")]
    InvalidTenantHost,

    #[error("database name is invalid")]
    InvalidDatabaseName,

    #[error("no tenant matches the given host or id")]
    TenantNotFound,

    #[error("tenant record has no usable database target")]
    UnknownTenant,

    #[error("session is bound to a different tenant")]
    SessionTenantMismatch,

    #[error("another tenant already uses this host")]
    DuplicateHost,

    #[error("another tenant already uses this database")]
    DuplicateDatabase,

    #[error("cache store unavailable: {0}")]
    CacheUnavailable(String),

    #[error("job payload carries a malformed tenant stamp")]
    InvalidPayloadStamp,

    #[error("migration failed for tenant #{tenant_id}: {cause}")]
    MigrationFailed { tenant_id: i64, cause: String },

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
