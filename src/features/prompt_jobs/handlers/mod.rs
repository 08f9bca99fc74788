pub mod prompt_job_handler;

pub use prompt_job_handler::*;
