mod generated_prompt;

pub use generated_prompt::GeneratedPrompt;
