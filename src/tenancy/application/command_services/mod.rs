pub mod tenant_directory_service_impl;
