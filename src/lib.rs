pub mod config;
pub mod tenancy;
