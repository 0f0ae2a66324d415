pub mod tenancy_domain_error;
