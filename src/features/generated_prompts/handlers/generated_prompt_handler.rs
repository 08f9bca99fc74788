use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::generated_prompts::dtos::{
    CreateGeneratedPromptDto, GeneratedPromptQueryParams, GeneratedPromptResponseDto,
};
use crate::features::generated_prompts::services::GeneratedPromptService;
use crate::shared::types::{ApiResponse, ListResponse};

/// Record a generated prompt for the caller
#[utoipa::path(
    post,
    path = "/api/generated-prompts",
    request_body = CreateGeneratedPromptDto,
    responses(
        (status = 201, description = "Generated prompt recorded", body = ApiResponse<GeneratedPromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Referenced template belongs to another user"),
        (status = 404, description = "Referenced template not found")
    ),
    tag = "generated-prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_generated_prompt(
    user: AuthenticatedUser,
    State(service): State<Arc<GeneratedPromptService>>,
    AppJson(dto): AppJson<CreateGeneratedPromptDto>,
) -> Result<(StatusCode, Json<ApiResponse<GeneratedPromptResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = service.create(user.user_id(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(prompt), None)),
    ))
}

/// Get one of the caller's generated prompts
#[utoipa::path(
    get,
    path = "/api/generated-prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Generated prompt ID")
    ),
    responses(
        (status = 200, description = "Generated prompt retrieved successfully", body = ApiResponse<GeneratedPromptResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Generated prompt not found")
    ),
    tag = "generated-prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_generated_prompt(
    user: AuthenticatedUser,
    State(service): State<Arc<GeneratedPromptService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GeneratedPromptResponseDto>>> {
    let prompt = service.get(id, user.user_id()).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None)))
}

/// List the caller's generated prompts
#[utoipa::path(
    get,
    path = "/api/generated-prompts",
    params(GeneratedPromptQueryParams),
    responses(
        (status = 200, description = "Generated prompts retrieved successfully", body = ApiResponse<ListResponse<GeneratedPromptResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "generated-prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_generated_prompts(
    user: AuthenticatedUser,
    State(service): State<Arc<GeneratedPromptService>>,
    AppQuery(params): AppQuery<GeneratedPromptQueryParams>,
) -> Result<Json<ApiResponse<ListResponse<GeneratedPromptResponseDto>>>> {
    let prompts = service.list(user.user_id(), &params).await?;
    Ok(Json(ApiResponse::success(Some(prompts.into()), None)))
}
