use axum::Router;
use dotenvy::dotenv;
use tenancy_axum_api::{
    config::app_config::AppConfig,
    tenancy::{
        build_tenancy_components, build_tenancy_router,
        interfaces::rest::resources::{
            create_tenant_request_resource::CreateTenantRequestResource,
            error_response_resource::ErrorResponseResource,
            reassign_tenant_database_request_resource::ReassignTenantDatabaseRequestResource,
            tenant_resource::TenantResource,
        },
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_admin_rest_controller::create_tenant,
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_admin_rest_controller::list_tenants,
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_admin_rest_controller::reassign_tenant_database,
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_admin_rest_controller::delete_tenant,
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_scoped_rest_controller::current_tenant
    ),
    components(
        schemas(
            CreateTenantRequestResource,
            ReassignTenantDatabaseRequestResource,
            TenantResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "tenancy", description = "Tenant catalog and per-tenant database routing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();

    let components = build_tenancy_components(&config)
        .await
        .expect("failed to build tenancy components");

    components
        .migration_service
        .init_owner_schema()
        .await
        .expect("failed to migrate owner schema");

    let app = Router::new()
        .merge(build_tenancy_router(&components))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");
    info!("swagger ui available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
