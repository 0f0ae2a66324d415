pub mod database_name;
pub mod tenant_host;
pub mod tenant_id;
