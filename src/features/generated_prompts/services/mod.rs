mod generated_prompt_service;

pub use generated_prompt_service::GeneratedPromptService;
