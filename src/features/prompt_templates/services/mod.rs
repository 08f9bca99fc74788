mod prompt_template_service;

pub use prompt_template_service::PromptTemplateService;
