pub mod sqlx_tenant_pool_cache_repository_impl;
pub mod sqlx_tenant_registry_repository_impl;
pub mod sqlx_tenant_schema_migration_repository_impl;
