use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::session::session_store::SessionStore,
};

pub struct InMemorySessionStore {
    bindings: RwLock<HashMap<String, i64>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<i64>, TenancyDomainError> {
        Ok(self.bindings.read().await.get(session_id).copied())
    }

    async fn put(&self, session_id: &str, tenant_id: i64) -> Result<(), TenancyDomainError> {
        self.bindings
            .write()
            .await
            .insert(session_id.to_string(), tenant_id);
        Ok(())
    }

    async fn has(&self, session_id: &str) -> Result<bool, TenancyDomainError> {
        Ok(self.bindings.read().await.contains_key(session_id))
    }
}
