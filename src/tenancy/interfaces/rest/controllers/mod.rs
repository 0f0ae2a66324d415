pub mod tenant_admin_rest_controller;
pub mod tenant_scoped_rest_controller;
