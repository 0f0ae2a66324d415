use sqlx::PgPool;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectionTarget {
    Owner,
    Tenant,
}

/// Context-local view of "which physical database do data operations hit".
/// One value exists per execution context (request or job dispatch); it is
/// never shared between contexts, so two concurrent requests can target
/// different tenants without observing each other. Only `ConnectionRouter`
/// mutates it.
#[derive(Clone, Debug)]
pub struct ActiveConnection {
    owner_pool: PgPool,
    tenant_pool: Option<PgPool>,
    tenant_database: Option<String>,
    target: ConnectionTarget,
}

impl ActiveConnection {
    pub(crate) fn owner(owner_pool: PgPool) -> Self {
        Self {
            owner_pool,
            tenant_pool: None,
            tenant_database: None,
            target: ConnectionTarget::Owner,
        }
    }

    pub(crate) fn set_tenant(&mut self, database: String, pool: PgPool) {
        self.tenant_database = Some(database);
        self.tenant_pool = Some(pool);
    }

    /// Drop this context's tenant handle. A retarget goes through here first
    /// so a pool for the previous database is never reused.
    pub(crate) fn clear_tenant(&mut self) {
        self.tenant_pool = None;
        self.tenant_database = None;
        self.target = ConnectionTarget::Owner;
    }

    pub(crate) fn select_tenant(&mut self) -> bool {
        if self.tenant_pool.is_none() {
            return false;
        }
        self.target = ConnectionTarget::Tenant;
        true
    }

    /// Pool data operations in this context should run against.
    pub fn pool(&self) -> &PgPool {
        match self.target {
            ConnectionTarget::Tenant => self
                .tenant_pool
                .as_ref()
                .unwrap_or(&self.owner_pool),
            ConnectionTarget::Owner => &self.owner_pool,
        }
    }

    pub fn owner_pool(&self) -> &PgPool {
        &self.owner_pool
    }

    pub fn target(&self) -> ConnectionTarget {
        self.target
    }

    pub fn tenant_database(&self) -> Option<&str> {
        self.tenant_database.as_deref()
    }
}
