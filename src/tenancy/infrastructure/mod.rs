pub mod cache;
pub mod connection;
pub mod persistence;
pub mod queue;
pub mod session;
