pub mod prompt_template_handler;

pub use prompt_template_handler::*;
