pub mod command_services;
pub mod context_services;
pub mod migration_services;
pub mod queue_services;
