use std::sync::Arc;

use axum::{
    extract::{Host, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::tenancy::{
    application::context_services::tenant_session_guard::TenantSessionGuard,
    domain::{
        model::enums::tenancy_domain_error::TenancyDomainError,
        services::tenant_context_service::TenantContextService,
    },
    infrastructure::connection::tenant_context::TenantContext,
    interfaces::rest::error_mapping::map_domain_error,
};

pub const SESSION_ID_HEADER: &str = "x-session-id";

#[derive(Clone)]
pub struct TenancyMiddlewareState {
    pub context_service: Arc<dyn TenantContextService>,
    pub session_guard: Arc<TenantSessionGuard>,
}

/// Resolves the tenant from the request host and enters its context before
/// the handler runs. Resolution failure is a hard 404; nothing downstream
/// ever executes with a missing or defaulted tenant.
pub async fn resolve_tenant_context(
    State(state): State<TenancyMiddlewareState>,
    Host(host): Host,
    mut request: Request,
    next: Next,
) -> Response {
    let host = host
        .split(':')
        .next()
        .unwrap_or(host.as_str())
        .to_string();

    let tenant = match state.context_service.resolve_from_host(&host).await {
        Ok(tenant) => tenant,
        Err(error) => {
            warn!(host, %error, "tenant resolution failed");
            return map_domain_error(error).into_response();
        }
    };

    let context = match state.context_service.enter(&tenant).await {
        Ok(context) => context,
        Err(error) => return map_domain_error(error).into_response(),
    };

    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Enforces the session-to-tenant binding after resolution. Runs inside the
/// resolution middleware so the `TenantContext` extension is present.
pub async fn enforce_tenant_session(
    State(state): State<TenancyMiddlewareState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(context) = request.extensions().get::<TenantContext>().cloned() else {
        // Resolution middleware missing from the stack; refuse rather than
        // serve without a tenant.
        return map_domain_error(TenancyDomainError::TenantNotFound).into_response();
    };

    let session_id = request
        .headers()
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Err(error) = state
        .session_guard
        .authorize(session_id.as_deref(), context.tenant())
        .await
    {
        warn!(tenant_id = %context.tenant().id(), %error, "session rejected");
        return map_domain_error(error).into_response();
    }

    next.run(request).await
}
