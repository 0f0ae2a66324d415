pub mod controllers;
pub mod error_mapping;
pub mod middleware;
pub mod resources;
