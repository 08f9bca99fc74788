pub mod generated_prompt_dto;

pub use generated_prompt_dto::{
    CreateGeneratedPromptDto, GeneratedPromptQueryParams, GeneratedPromptResponseDto,
};
