use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tenancy_axum_api::tenancy::{
    application::queue_services::tenant_job_dispatcher::JobHandler,
    domain::model::{
        commands::create_tenant_command::CreateTenantCommand,
        entities::tenant::Tenant,
        enums::tenancy_domain_error::TenancyDomainError,
        value_objects::{
            database_name::DatabaseName, tenant_host::TenantHost, tenant_id::TenantId,
        },
    },
    infrastructure::{
        connection::tenant_context::TenantContext,
        persistence::repositories::{
            tenant_pool_cache_repository::TenantPoolCacheRepository,
            tenant_registry_repository::TenantRegistryRepository,
            tenant_schema_migration_repository::TenantSchemaMigrationRepository,
        },
        queue::job_queue::JobEnvelope,
    },
};

#[derive(Default)]
struct FakeTenantRegistryState {
    tenants: HashMap<i64, Tenant>,
    next_id: i64,
    reassignments: Vec<(i64, String)>,
}

pub struct FakeTenantRegistry {
    state: Mutex<FakeTenantRegistryState>,
}

impl FakeTenantRegistry {
    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        let mut map = HashMap::new();
        let mut next_id = 1;
        for tenant in tenants {
            next_id = next_id.max(tenant.id().value() + 1);
            map.insert(tenant.id().value(), tenant);
        }

        Self {
            state: Mutex::new(FakeTenantRegistryState {
                tenants: map,
                next_id,
                reassignments: Vec::new(),
            }),
        }
    }

    pub fn reassignments(&self) -> Vec<(i64, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .reassignments
            .clone()
    }
}

#[async_trait]
impl TenantRegistryRepository for FakeTenantRegistry {
    async fn find_by_host(
        &self,
        host: &TenantHost,
    ) -> Result<Option<Tenant>, TenancyDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .tenants
            .values()
            .find(|tenant| tenant.host() == host)
            .cloned())
    }

    async fn find_by_id(&self, tenant_id: TenantId) -> Result<Option<Tenant>, TenancyDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.tenants.get(&tenant_id.value()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Tenant>, TenancyDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        let mut tenants: Vec<Tenant> = state.tenants.values().cloned().collect();
        tenants.sort_by_key(|tenant| tenant.id().value());
        Ok(tenants)
    }

    async fn create(&self, command: &CreateTenantCommand) -> Result<Tenant, TenancyDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state
            .tenants
            .values()
            .any(|tenant| tenant.host() == command.host())
        {
            return Err(TenancyDomainError::DuplicateHost);
        }
        if state
            .tenants
            .values()
            .any(|tenant| tenant.database() == command.database().value())
        {
            return Err(TenancyDomainError::DuplicateDatabase);
        }

        let id = state.next_id;
        state.next_id += 1;

        let tenant = Tenant::restore(
            TenantId::new(id)?,
            command.name().to_string(),
            command.host().clone(),
            command.database().value().to_string(),
            Utc::now(),
            Utc::now(),
        );
        state.tenants.insert(id, tenant.clone());
        Ok(tenant)
    }

    async fn reassign_database(
        &self,
        tenant_id: TenantId,
        database: &DatabaseName,
    ) -> Result<Tenant, TenancyDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state.tenants.values().any(|tenant| {
            tenant.id() != tenant_id && tenant.database() == database.value()
        }) {
            return Err(TenancyDomainError::DuplicateDatabase);
        }

        let tenant = state
            .tenants
            .get_mut(&tenant_id.value())
            .ok_or(TenancyDomainError::TenantNotFound)?;
        tenant.reassign_database(database.clone(), Utc::now());
        let updated = tenant.clone();

        state
            .reassignments
            .push((tenant_id.value(), database.value().to_string()));
        Ok(updated)
    }

    async fn delete(&self, tenant_id: TenantId) -> Result<(), TenancyDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state
            .tenants
            .remove(&tenant_id.value())
            .map(|_| ())
            .ok_or(TenancyDomainError::TenantNotFound)
    }
}

#[derive(Default)]
struct FakePoolCacheState {
    pools: HashMap<String, PgPool>,
    requested: Vec<String>,
    purged: Vec<String>,
}

/// Hands out lazily-connected pools so router plumbing is exercised without
/// a live server, and records which databases were requested or purged.
pub struct FakePoolCache {
    state: Mutex<FakePoolCacheState>,
}

impl FakePoolCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakePoolCacheState::default()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").requested.clone()
    }

    pub fn purged(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").purged.clone()
    }
}

#[async_trait]
impl TenantPoolCacheRepository for FakePoolCache {
    async fn get_or_create_pool(
        &self,
        database_name: &str,
        database_url: &str,
    ) -> Result<PgPool, TenancyDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.requested.push(database_name.to_string());

        if let Some(pool) = state.pools.get(database_name) {
            return Ok(pool.clone());
        }

        let pool = PgPool::connect_lazy(database_url)
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
        state.pools.insert(database_name.to_string(), pool.clone());
        Ok(pool)
    }

    async fn purge(&self, database_name: &str) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.pools.remove(database_name);
        state.purged.push(database_name.to_string());
    }
}

#[derive(Default)]
struct FakeSchemaMigrationState {
    owner_runs: usize,
    tenant_runs: Vec<(i64, bool, bool)>,
    failing_tenants: HashSet<i64>,
}

pub struct FakeSchemaMigrationRepository {
    state: Mutex<FakeSchemaMigrationState>,
}

impl FakeSchemaMigrationRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeSchemaMigrationState::default()),
        }
    }

    pub fn fail_for(&self, tenant_id: i64) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .failing_tenants
            .insert(tenant_id);
    }

    pub fn owner_runs(&self) -> usize {
        self.state.lock().expect("mutex poisoned").owner_runs
    }

    pub fn tenant_runs(&self) -> Vec<(i64, bool, bool)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tenant_runs
            .clone()
    }
}

#[async_trait]
impl TenantSchemaMigrationRepository for FakeSchemaMigrationRepository {
    async fn run_owner_migrations(&self, _owner_pool: &PgPool) -> Result<(), TenancyDomainError> {
        self.state.lock().expect("mutex poisoned").owner_runs += 1;
        Ok(())
    }

    async fn run_tenant_migrations(
        &self,
        tenant: &Tenant,
        _owner_pool: &PgPool,
        _tenant_pool: &PgPool,
        fresh: bool,
        seed: bool,
    ) -> Result<(), TenancyDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state.failing_tenants.contains(&tenant.id().value()) {
            return Err(TenancyDomainError::InfrastructureError(
                "simulated migration failure".to_string(),
            ));
        }

        state.tenant_runs.push((tenant.id().value(), fresh, seed));
        Ok(())
    }
}

type HandledJob = (String, Option<i64>, Option<String>);

#[derive(Default)]
pub struct RecordingJobHandler {
    calls: Mutex<Vec<HandledJob>>,
}

impl RecordingJobHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HandledJob> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl JobHandler for RecordingJobHandler {
    async fn handle(
        &self,
        job: &JobEnvelope,
        context: Option<&TenantContext>,
    ) -> Result<(), TenancyDomainError> {
        self.calls.lock().expect("mutex poisoned").push((
            job.job_type.clone(),
            context.map(|c| c.tenant().id().value()),
            context.and_then(|c| c.connection().tenant_database().map(str::to_string)),
        ));
        Ok(())
    }
}
