pub mod tenant_resolution_middleware;
