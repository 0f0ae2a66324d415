pub mod active_connection;
pub mod connection_router;
pub mod tenant_context;
