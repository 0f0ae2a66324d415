use lazy_static::lazy_static;
use regex::Regex;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

lazy_static! {
    static ref HOST_PATTERN: Regex =
        Regex::new(r"^[a-z0-9]([a-z0-9-]{0,62}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,62}[a-z0-9])?)*$")
            .expect("valid regex");
}

/// Hostname a tenant is resolved by. Matching is exact, so the value is
/// normalized to lowercase with any trailing dot stripped.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TenantHost(String);

impl TenantHost {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let normalized = value.trim().trim_end_matches('.').to_lowercase();

        if normalized.is_empty() || normalized.len() > 253 || !HOST_PATTERN.is_match(&normalized) {
            return Err(TenancyDomainError::InvalidTenantHost);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
