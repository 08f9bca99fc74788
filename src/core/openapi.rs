use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::favorites::{dtos as favorites_dtos, handlers as favorites_handlers};
use crate::features::generated_prompts::{
    dtos as generated_prompts_dtos, handlers as generated_prompts_handlers,
};
use crate::features::prompt_jobs::{
    dtos as prompt_jobs_dtos, handlers as prompt_jobs_handlers, models as prompt_jobs_models,
};
use crate::features::prompt_templates::{
    dtos as prompt_templates_dtos, handlers as prompt_templates_handlers,
};
use crate::shared::types::{ApiResponse, ListResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Prompt templates
        prompt_templates_handlers::create_prompt_template,
        prompt_templates_handlers::get_prompt_template,
        prompt_templates_handlers::list_prompt_templates,
        prompt_templates_handlers::update_prompt_template,
        // Generated prompts
        generated_prompts_handlers::create_generated_prompt,
        generated_prompts_handlers::get_generated_prompt,
        generated_prompts_handlers::list_generated_prompts,
        // Favorites
        favorites_handlers::add_favorite_prompt,
        favorites_handlers::remove_favorite_prompt,
        favorites_handlers::list_favorite_prompts,
        // Prompt jobs
        prompt_jobs_handlers::create_prompt_job,
        prompt_jobs_handlers::list_prompt_jobs,
    ),
    components(
        schemas(
            auth::dto::MeResponseDto,
            ApiResponse<auth::dto::MeResponseDto>,
            // Prompt templates
            prompt_templates_dtos::CreatePromptTemplateDto,
            prompt_templates_dtos::UpdatePromptTemplateDto,
            prompt_templates_dtos::PromptTemplateResponseDto,
            ApiResponse<prompt_templates_dtos::PromptTemplateResponseDto>,
            ApiResponse<ListResponse<prompt_templates_dtos::PromptTemplateResponseDto>>,
            // Generated prompts
            generated_prompts_dtos::CreateGeneratedPromptDto,
            generated_prompts_dtos::GeneratedPromptResponseDto,
            ApiResponse<generated_prompts_dtos::GeneratedPromptResponseDto>,
            ApiResponse<ListResponse<generated_prompts_dtos::GeneratedPromptResponseDto>>,
            // Favorites
            favorites_dtos::AddFavoriteDto,
            favorites_dtos::FavoriteResponseDto,
            ApiResponse<favorites_dtos::FavoriteResponseDto>,
            ApiResponse<ListResponse<favorites_dtos::FavoriteResponseDto>>,
            // Prompt jobs
            prompt_jobs_models::PromptJobStatus,
            prompt_jobs_dtos::CreatePromptJobDto,
            prompt_jobs_dtos::PromptJobResponseDto,
            ApiResponse<prompt_jobs_dtos::PromptJobResponseDto>,
            ApiResponse<ListResponse<prompt_jobs_dtos::PromptJobResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Current caller identity"),
        (name = "prompt-templates", description = "Reusable prompt templates, private or shared"),
        (name = "generated-prompts", description = "Prompts realized from templates"),
        (name = "favorites", description = "Bookmarks on generated prompts"),
        (name = "prompt-jobs", description = "History of generation attempts"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Teaching Prompts API",
        version = "0.1.0",
        description = "API documentation for the teaching prompts service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
