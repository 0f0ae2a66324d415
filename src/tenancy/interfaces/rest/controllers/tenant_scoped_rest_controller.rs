use axum::{Extension, Json, http::StatusCode};

use crate::tenancy::{
    infrastructure::connection::tenant_context::TenantContext,
    interfaces::rest::resources::{
        error_response_resource::ErrorResponseResource, tenant_resource::TenantResource,
    },
};

/// Routes behind the tenant-resolution middleware. The `TenantContext`
/// extension is inserted by the middleware after `enter` completes, so any
/// handler here runs with the tenant's connection and cache scope active.
#[utoipa::path(
    get,
    path = "/tenant/current",
    tag = "tenancy",
    responses(
        (status = 200, description = "Tenant resolved for this request", body = TenantResource),
        (status = 401, description = "Session bound to another tenant", body = ErrorResponseResource),
        (status = 404, description = "No tenant matches the request host", body = ErrorResponseResource)
    )
)]
pub async fn current_tenant(
    Extension(context): Extension<TenantContext>,
) -> Result<Json<TenantResource>, StatusCode> {
    Ok(Json(TenantResource::from(context.tenant())))
}
