pub mod create_tenant_request_resource;
pub mod error_response_resource;
pub mod reassign_tenant_database_request_resource;
pub mod tenant_resource;
