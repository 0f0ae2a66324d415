use lazy_static::lazy_static;
use regex::Regex;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

lazy_static! {
    static ref DATABASE_NAME_PATTERN: Regex =
        Regex::new(r"^[a-z][a-z0-9_]{2,62}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let normalized = value.trim().to_lowercase();

        if !DATABASE_NAME_PATTERN.is_match(&normalized) {
            return Err(TenancyDomainError::InvalidDatabaseName);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
