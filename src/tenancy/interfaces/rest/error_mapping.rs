use axum::{Json, http::StatusCode};

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

pub fn map_domain_error(
    error: TenancyDomainError,
) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match &error {
        TenancyDomainError::TenantNotFound => StatusCode::NOT_FOUND,
        TenancyDomainError::SessionTenantMismatch => StatusCode::UNAUTHORIZED,
        TenancyDomainError::DuplicateHost | TenancyDomainError::DuplicateDatabase => {
            StatusCode::CONFLICT
        }
        TenancyDomainError::InvalidTenantId
        | TenancyDomainError::InvalidTenantHost
        | TenancyDomainError::InvalidDatabaseName
        | TenancyDomainError::InvalidPayloadStamp => StatusCode::BAD_REQUEST,
        TenancyDomainError::UnknownTenant => StatusCode::UNPROCESSABLE_ENTITY,
        TenancyDomainError::CacheUnavailable(_)
        | TenancyDomainError::MigrationFailed { .. }
        | TenancyDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
