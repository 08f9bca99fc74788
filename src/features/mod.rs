pub mod auth;
pub mod favorites;
pub mod generated_prompts;
pub mod prompt_jobs;
pub mod prompt_templates;
