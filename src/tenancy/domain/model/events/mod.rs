pub mod tenant_database_reassigned_event;
