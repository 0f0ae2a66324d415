pub mod in_memory_job_queue;
pub mod job_queue;
