use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use validator::Validate;

use crate::tenancy::{
    domain::{
        model::{
            commands::{
                create_tenant_command::CreateTenantCommand,
                reassign_tenant_database_command::ReassignTenantDatabaseCommand,
            },
            value_objects::tenant_id::TenantId,
        },
        services::tenant_directory_service::TenantDirectoryService,
    },
    interfaces::rest::{
        error_mapping::map_domain_error,
        resources::{
            create_tenant_request_resource::CreateTenantRequestResource,
            error_response_resource::ErrorResponseResource,
            reassign_tenant_database_request_resource::ReassignTenantDatabaseRequestResource,
            tenant_resource::TenantResource,
        },
    },
};

#[derive(Clone)]
pub struct TenantAdminRestControllerState {
    pub directory_service: Arc<dyn TenantDirectoryService>,
}

/// Owner-scoped catalog administration. None of these routes run behind the
/// tenant-resolution middleware.
pub fn router(state: TenantAdminRestControllerState) -> Router {
    Router::new()
        .route("/tenants", post(create_tenant))
        .route("/tenants", get(list_tenants))
        .route("/tenants/:tenant_id/database", put(reassign_tenant_database))
        .route("/tenants/:tenant_id", delete(delete_tenant))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/tenants",
    tag = "tenancy",
    request_body = CreateTenantRequestResource,
    responses(
        (status = 201, description = "Tenant created", body = TenantResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "Host or database already in use", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_tenant(
    State(state): State<TenantAdminRestControllerState>,
    Json(request): Json<CreateTenantRequestResource>,
) -> Result<(StatusCode, Json<TenantResource>), (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = CreateTenantCommand::new(request.name, request.host, request.database)
        .map_err(map_domain_error)?;

    let created = state
        .directory_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(TenantResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/tenants",
    tag = "tenancy",
    responses(
        (status = 200, description = "All registered tenants", body = [TenantResource]),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_tenants(
    State(state): State<TenantAdminRestControllerState>,
) -> Result<Json<Vec<TenantResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let tenants = state
        .directory_service
        .handle_list()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(tenants.iter().map(TenantResource::from).collect()))
}

#[utoipa::path(
    put,
    path = "/tenants/{tenant_id}/database",
    tag = "tenancy",
    params(("tenant_id" = i64, Path, description = "Tenant identifier")),
    request_body = ReassignTenantDatabaseRequestResource,
    responses(
        (status = 200, description = "Tenant routing record updated", body = TenantResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 404, description = "Tenant not found", body = ErrorResponseResource),
        (status = 409, description = "Database already in use", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn reassign_tenant_database(
    State(state): State<TenantAdminRestControllerState>,
    Path(tenant_id): Path<i64>,
    Json(request): Json<ReassignTenantDatabaseRequestResource>,
) -> Result<Json<TenantResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command =
        ReassignTenantDatabaseCommand::new(tenant_id, request.database).map_err(map_domain_error)?;

    let updated = state
        .directory_service
        .handle_reassign_database(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TenantResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/tenants/{tenant_id}",
    tag = "tenancy",
    params(("tenant_id" = i64, Path, description = "Tenant identifier")),
    responses(
        (status = 204, description = "Tenant deleted"),
        (status = 404, description = "Tenant not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_tenant(
    State(state): State<TenantAdminRestControllerState>,
    Path(tenant_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    let tenant_id = TenantId::new(tenant_id).map_err(map_domain_error)?;

    state
        .directory_service
        .handle_delete(tenant_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
