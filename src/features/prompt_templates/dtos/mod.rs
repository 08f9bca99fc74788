pub mod prompt_template_dto;

pub use prompt_template_dto::{
    CreatePromptTemplateDto, PromptTemplateQueryParams, PromptTemplateResponseDto,
    UpdatePromptTemplateDto,
};
