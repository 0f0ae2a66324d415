pub mod tenant_migration_service_impl;
