use chrono::Utc;
use sqlx::PgPool;
use tenancy_axum_api::{
    config::app_config::AppConfig,
    tenancy::domain::model::{
        entities::tenant::Tenant,
        value_objects::{tenant_host::TenantHost, tenant_id::TenantId},
    },
};

pub fn tenant(id: i64, name: &str, host: &str, database: &str) -> Tenant {
    Tenant::restore(
        TenantId::new(id).expect("valid tenant id"),
        name.to_string(),
        TenantHost::new(host.to_string()).expect("valid host"),
        database.to_string(),
        Utc::now(),
        Utc::now(),
    )
}

pub fn tenant_id(id: i64) -> TenantId {
    TenantId::new(id).expect("valid tenant id")
}

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        postgres_host: "127.0.0.1".to_string(),
        postgres_port: 5432,
        postgres_user: "postgres".to_string(),
        postgres_password: "admin".to_string(),
        owner_database: "owner_test".to_string(),
        tenant_cache_index_capacity: 1024,
    }
}

/// Lazily-connected pool: never touches the network unless queried.
pub fn lazy_owner_pool() -> PgPool {
    PgPool::connect_lazy(&test_config().owner_database_url()).expect("lazy pool")
}
