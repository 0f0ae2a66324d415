pub mod job_context_propagator;
pub mod tenant_job_dispatcher;
