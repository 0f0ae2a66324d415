use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::Arc,
};

use tokio::sync::RwLock;
use tracing::warn;

use crate::tenancy::{
    domain::model::{
        enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
    },
    infrastructure::cache::cache_store::CacheStore,
};

/// Insertion-ordered set of the cache keys one tenant has written.
#[derive(Default)]
struct TenantKeyIndex {
    order: VecDeque<String>,
    members: HashSet<String>,
}

impl TenantKeyIndex {
    fn insert(&mut self, key: &str) {
        if self.members.insert(key.to_string()) {
            self.order.push_back(key.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        if self.members.remove(key) {
            self.order.retain(|k| k != key);
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

/// Scopes cache writes to the tenant that issued them, so invalidation can
/// target one tenant without flushing the whole store. The index is bounded
/// per tenant: on overflow it is first reconciled against the store (keys
/// the store has since evicted are dropped) and then the oldest indexed key
/// is evicted together with its cache entry.
pub struct TenantCacheIsolator {
    store: Arc<dyn CacheStore>,
    index: RwLock<HashMap<i64, TenantKeyIndex>>,
    capacity_per_tenant: usize,
}

impl TenantCacheIsolator {
    pub fn new(store: Arc<dyn CacheStore>, capacity_per_tenant: usize) -> Self {
        Self {
            store,
            index: RwLock::new(HashMap::new()),
            capacity_per_tenant: capacity_per_tenant.max(1),
        }
    }

    pub fn scope_to(self: &Arc<Self>, tenant_id: TenantId) -> TenantCacheScope {
        TenantCacheScope {
            isolator: self.clone(),
            tenant_id,
        }
    }

    /// Attribute `key` to `tenant_id`. Append semantics: concurrent records
    /// within one tenant scope serialize on the write lock and never drop
    /// each other's keys.
    pub async fn record(&self, tenant_id: TenantId, key: &str) -> Result<(), TenancyDomainError> {
        let evicted = {
            let mut guard = self.index.write().await;
            let entry = guard.entry(tenant_id.value()).or_default();
            entry.insert(key);

            if entry.len() <= self.capacity_per_tenant {
                Vec::new()
            } else {
                let candidates: Vec<String> = entry.order.iter().cloned().collect();
                drop(guard);
                self.prune_expired(tenant_id, candidates).await?;

                let mut guard = self.index.write().await;
                let entry = guard.entry(tenant_id.value()).or_default();
                let mut evicted = Vec::new();
                while entry.len() > self.capacity_per_tenant {
                    match entry.order.pop_front() {
                        Some(oldest) => {
                            entry.members.remove(&oldest);
                            evicted.push(oldest);
                        }
                        None => break,
                    }
                }
                evicted
            }
        };

        for key in evicted {
            self.store.forget(&key).await?;
        }
        Ok(())
    }

    /// Remove every cache entry recorded for `tenant_id`, then the index
    /// itself. Keys the store refused to drop stay indexed so a retry can
    /// still reach them.
    pub async fn clear_tenant(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError> {
        let keys: Vec<String> = {
            let guard = self.index.read().await;
            match guard.get(&tenant_id.value()) {
                Some(entry) => entry.order.iter().cloned().collect(),
                None => return Ok(()),
            }
        };

        for key in &keys {
            self.store.forget(key).await?;
            self.index
                .write()
                .await
                .entry(tenant_id.value())
                .or_default()
                .remove(key);
        }

        self.index.write().await.remove(&tenant_id.value());
        Ok(())
    }

    pub async fn indexed_keys(&self, tenant_id: TenantId) -> Vec<String> {
        let guard = self.index.read().await;
        guard
            .get(&tenant_id.value())
            .map(|entry| entry.order.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Lazy reconciliation: drop index entries whose backing cache entry has
    /// already expired or been evicted by the store.
    async fn prune_expired(
        &self,
        tenant_id: TenantId,
        candidates: Vec<String>,
    ) -> Result<(), TenancyDomainError> {
        let mut gone = Vec::new();
        for key in candidates {
            if !self.store.has(&key).await? {
                gone.push(key);
            }
        }

        if gone.is_empty() {
            return Ok(());
        }

        let mut guard = self.index.write().await;
        if let Some(entry) = guard.get_mut(&tenant_id.value()) {
            for key in &gone {
                entry.remove(key);
            }
        }
        Ok(())
    }
}

/// Handle binding cache operations to one tenant for the rest of an
/// execution context.
#[derive(Clone)]
pub struct TenantCacheScope {
    isolator: Arc<TenantCacheIsolator>,
    tenant_id: TenantId,
}

impl TenantCacheScope {
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub async fn put(&self, key: &str, value: String) -> Result<(), TenancyDomainError> {
        self.isolator.store.put(key, value).await?;
        if let Err(error) = self.isolator.record(self.tenant_id, key).await {
            warn!(tenant_id = %self.tenant_id, key, %error, "cache key recorded write failed");
            return Err(error);
        }
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, TenancyDomainError> {
        self.isolator.store.get(key).await
    }
}
