mod prompt_job_service;

pub use prompt_job_service::PromptJobService;
