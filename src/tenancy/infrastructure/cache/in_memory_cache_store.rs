use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::cache::cache_store::CacheStore,
};

/// Locked-map cache store used by the demo wiring and the test harness.
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate an unreachable backing store.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), TenancyDomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(TenancyDomainError::CacheUnavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TenancyDomainError> {
        self.check_available()?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), TenancyDomainError> {
        self.check_available()?;
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), TenancyDomainError> {
        self.check_available()?;
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn has(&self, key: &str) -> Result<bool, TenancyDomainError> {
        self.check_available()?;
        Ok(self.entries.read().await.contains_key(key))
    }
}
