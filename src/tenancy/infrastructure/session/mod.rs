pub mod in_memory_session_store;
pub mod session_store;
