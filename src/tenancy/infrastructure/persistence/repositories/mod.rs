pub mod postgres;
pub mod tenant_pool_cache_repository;
pub mod tenant_registry_repository;
pub mod tenant_schema_migration_repository;
