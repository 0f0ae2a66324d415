pub mod tenant_context_service_impl;
pub mod tenant_session_guard;
