pub mod create_tenant_command;
pub mod reassign_tenant_database_command;
