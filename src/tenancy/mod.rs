use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    tenancy::{
        application::{
            command_services::tenant_directory_service_impl::TenantDirectoryServiceImpl,
            context_services::{
                tenant_context_service_impl::TenantContextServiceImpl,
                tenant_session_guard::TenantSessionGuard,
            },
            migration_services::tenant_migration_service_impl::TenantMigrationServiceImpl,
            queue_services::{
                job_context_propagator::JobContextPropagator,
                tenant_job_dispatcher::{TenantAwareJobQueue, TenantJobDispatcher},
            },
        },
        domain::services::{
            tenant_context_service::TenantContextService,
            tenant_directory_service::TenantDirectoryService,
            tenant_migration_service::TenantMigrationService,
        },
        infrastructure::{
            cache::{
                in_memory_cache_store::InMemoryCacheStore,
                tenant_cache_isolator::TenantCacheIsolator,
            },
            connection::connection_router::ConnectionRouter,
            persistence::repositories::postgres::{
                sqlx_tenant_pool_cache_repository_impl::SqlxTenantPoolCacheRepositoryImpl,
                sqlx_tenant_registry_repository_impl::SqlxTenantRegistryRepositoryImpl,
                sqlx_tenant_schema_migration_repository_impl::SqlxTenantSchemaMigrationRepositoryImpl,
            },
            queue::in_memory_job_queue::InMemoryJobQueue,
            session::in_memory_session_store::InMemorySessionStore,
        },
        interfaces::rest::{
            controllers::{
                tenant_admin_rest_controller::{self, TenantAdminRestControllerState},
                tenant_scoped_rest_controller,
            },
            middleware::tenant_resolution_middleware::{
                TenancyMiddlewareState, enforce_tenant_session, resolve_tenant_context,
            },
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Fully wired tenancy stack. The in-memory cache, session and queue
/// collaborators are the demo/default wiring; deployments swap them for
/// their own `CacheStore` / `SessionStore` / `JobQueue` impls.
pub struct TenancyComponents {
    pub owner_pool: PgPool,
    pub context_service: Arc<dyn TenantContextService>,
    pub directory_service: Arc<dyn TenantDirectoryService>,
    pub migration_service: Arc<dyn TenantMigrationService>,
    pub session_guard: Arc<TenantSessionGuard>,
    pub job_queue: Arc<InMemoryJobQueue>,
    pub tenant_aware_queue: Arc<TenantAwareJobQueue>,
    pub job_dispatcher: Arc<TenantJobDispatcher>,
}

pub async fn build_tenancy_components(config: &AppConfig) -> Result<TenancyComponents, String> {
    let owner_pool = PgPool::connect(&config.owner_database_url())
        .await
        .map_err(|e| e.to_string())?;

    let registry = Arc::new(SqlxTenantRegistryRepositoryImpl::new(owner_pool.clone()));
    let pool_cache = Arc::new(SqlxTenantPoolCacheRepositoryImpl::new());
    let connection_router = Arc::new(ConnectionRouter::new(
        owner_pool.clone(),
        pool_cache.clone(),
        config.clone(),
    ));

    let cache_store = Arc::new(InMemoryCacheStore::new());
    let cache_isolator = Arc::new(TenantCacheIsolator::new(
        cache_store,
        config.tenant_cache_index_capacity,
    ));

    let context_service: Arc<dyn TenantContextService> = Arc::new(TenantContextServiceImpl::new(
        registry.clone(),
        connection_router,
        cache_isolator.clone(),
    ));

    let directory_service: Arc<dyn TenantDirectoryService> =
        Arc::new(TenantDirectoryServiceImpl::new(
            registry.clone(),
            pool_cache,
            cache_isolator,
        ));

    let schema_migrations = Arc::new(SqlxTenantSchemaMigrationRepositoryImpl::new());
    let migration_service: Arc<dyn TenantMigrationService> =
        Arc::new(TenantMigrationServiceImpl::new(
            registry,
            context_service.clone(),
            schema_migrations,
            owner_pool.clone(),
        ));

    let session_store = Arc::new(InMemorySessionStore::new());
    let session_guard = Arc::new(TenantSessionGuard::new(session_store));

    let job_queue = Arc::new(InMemoryJobQueue::new());
    let propagator = Arc::new(JobContextPropagator::new(context_service.clone()));
    let tenant_aware_queue = Arc::new(TenantAwareJobQueue::new(
        job_queue.clone(),
        propagator.clone(),
    ));
    let job_dispatcher = Arc::new(TenantJobDispatcher::new(propagator));

    Ok(TenancyComponents {
        owner_pool,
        context_service,
        directory_service,
        migration_service,
        session_guard,
        job_queue,
        tenant_aware_queue,
        job_dispatcher,
    })
}

/// Admin routes stay owner-scoped; everything under the tenant router runs
/// after `enter` has completed for the resolved tenant.
pub fn build_tenancy_router(components: &TenancyComponents) -> Router {
    let middleware_state = TenancyMiddlewareState {
        context_service: components.context_service.clone(),
        session_guard: components.session_guard.clone(),
    };

    let tenant_router = Router::new()
        .route(
            "/tenant/current",
            get(tenant_scoped_rest_controller::current_tenant),
        )
        .layer(from_fn_with_state(
            middleware_state.clone(),
            enforce_tenant_session,
        ))
        .layer(from_fn_with_state(middleware_state, resolve_tenant_context));

    let admin_router = tenant_admin_rest_controller::router(TenantAdminRestControllerState {
        directory_service: components.directory_service.clone(),
    });

    Router::new().merge(admin_router).merge(tenant_router)
}
