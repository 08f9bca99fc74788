pub mod generated_prompt_handler;

pub use generated_prompt_handler::*;
