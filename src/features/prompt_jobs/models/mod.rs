mod prompt_job;

pub use prompt_job::{PromptJob, PromptJobStatus};
