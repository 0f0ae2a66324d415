pub mod cache_store;
pub mod in_memory_cache_store;
pub mod tenant_cache_isolator;
