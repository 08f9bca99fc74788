pub mod prompt_job_dto;

pub use prompt_job_dto::{CreatePromptJobDto, PromptJobResponseDto};
