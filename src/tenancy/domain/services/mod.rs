pub mod tenant_context_service;
pub mod tenant_directory_service;
pub mod tenant_migration_service;
