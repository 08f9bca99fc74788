mod prompt_template;

pub use prompt_template::{ensure_accessible, PromptTemplate};
