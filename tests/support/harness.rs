use std::sync::Arc;

use tenancy_axum_api::tenancy::{
    application::{
        command_services::tenant_directory_service_impl::TenantDirectoryServiceImpl,
        context_services::tenant_context_service_impl::TenantContextServiceImpl,
        migration_services::tenant_migration_service_impl::TenantMigrationServiceImpl,
        queue_services::{
            job_context_propagator::JobContextPropagator,
            tenant_job_dispatcher::{TenantAwareJobQueue, TenantJobDispatcher},
        },
    },
    domain::{
        model::entities::tenant::Tenant,
        services::tenant_context_service::TenantContextService,
    },
    infrastructure::{
        cache::{
            in_memory_cache_store::InMemoryCacheStore, tenant_cache_isolator::TenantCacheIsolator,
        },
        connection::connection_router::ConnectionRouter,
        queue::in_memory_job_queue::InMemoryJobQueue,
    },
};

use super::fakes::{FakePoolCache, FakeSchemaMigrationRepository, FakeTenantRegistry};
use super::fixtures::{lazy_owner_pool, test_config};

pub struct ContextHarness {
    pub registry: Arc<FakeTenantRegistry>,
    pub pool_cache: Arc<FakePoolCache>,
    pub cache_store: Arc<InMemoryCacheStore>,
    pub cache_isolator: Arc<TenantCacheIsolator>,
    pub context_service: Arc<dyn TenantContextService>,
}

pub fn create_context_harness(tenants: Vec<Tenant>) -> ContextHarness {
    let registry = Arc::new(FakeTenantRegistry::with_tenants(tenants));
    let pool_cache = Arc::new(FakePoolCache::new());
    let cache_store = Arc::new(InMemoryCacheStore::new());
    let cache_isolator = Arc::new(TenantCacheIsolator::new(cache_store.clone(), 1024));

    let router = Arc::new(ConnectionRouter::new(
        lazy_owner_pool(),
        pool_cache.clone(),
        test_config(),
    ));

    let context_service: Arc<dyn TenantContextService> = Arc::new(TenantContextServiceImpl::new(
        registry.clone(),
        router,
        cache_isolator.clone(),
    ));

    ContextHarness {
        registry,
        pool_cache,
        cache_store,
        cache_isolator,
        context_service,
    }
}

pub struct DirectoryHarness {
    pub registry: Arc<FakeTenantRegistry>,
    pub pool_cache: Arc<FakePoolCache>,
    pub cache_store: Arc<InMemoryCacheStore>,
    pub cache_isolator: Arc<TenantCacheIsolator>,
    pub service: TenantDirectoryServiceImpl,
}

pub fn create_directory_harness(tenants: Vec<Tenant>) -> DirectoryHarness {
    let registry = Arc::new(FakeTenantRegistry::with_tenants(tenants));
    let pool_cache = Arc::new(FakePoolCache::new());
    let cache_store = Arc::new(InMemoryCacheStore::new());
    let cache_isolator = Arc::new(TenantCacheIsolator::new(cache_store.clone(), 1024));

    let service = TenantDirectoryServiceImpl::new(
        registry.clone(),
        pool_cache.clone(),
        cache_isolator.clone(),
    );

    DirectoryHarness {
        registry,
        pool_cache,
        cache_store,
        cache_isolator,
        service,
    }
}

pub struct MigrationHarness {
    pub context: ContextHarness,
    pub schema_migrations: Arc<FakeSchemaMigrationRepository>,
    pub service: TenantMigrationServiceImpl,
}

pub fn create_migration_harness(tenants: Vec<Tenant>) -> MigrationHarness {
    let context = create_context_harness(tenants);
    let schema_migrations = Arc::new(FakeSchemaMigrationRepository::new());

    let service = TenantMigrationServiceImpl::new(
        context.registry.clone(),
        context.context_service.clone(),
        schema_migrations.clone(),
        lazy_owner_pool(),
    );

    MigrationHarness {
        context,
        schema_migrations,
        service,
    }
}

pub struct JobsHarness {
    pub context: ContextHarness,
    pub queue: Arc<InMemoryJobQueue>,
    pub propagator: Arc<JobContextPropagator>,
    pub tenant_queue: TenantAwareJobQueue,
    pub dispatcher: TenantJobDispatcher,
}

pub fn create_jobs_harness(tenants: Vec<Tenant>) -> JobsHarness {
    let context = create_context_harness(tenants);
    let queue = Arc::new(InMemoryJobQueue::new());
    let propagator = Arc::new(JobContextPropagator::new(context.context_service.clone()));
    let tenant_queue = TenantAwareJobQueue::new(queue.clone(), propagator.clone());
    let dispatcher = TenantJobDispatcher::new(propagator.clone());

    JobsHarness {
        context,
        queue,
        propagator,
        tenant_queue,
        dispatcher,
    }
}
