use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::prompt_jobs::dtos::{CreatePromptJobDto, PromptJobResponseDto};
use crate::features::prompt_jobs::services::PromptJobService;
use crate::shared::types::{ApiResponse, ListResponse};

/// Record a prompt job for the caller
#[utoipa::path(
    post,
    path = "/api/prompt-jobs",
    request_body = CreatePromptJobDto,
    responses(
        (status = 201, description = "Prompt job recorded", body = ApiResponse<PromptJobResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Referenced template belongs to another user"),
        (status = 404, description = "Referenced template not found")
    ),
    tag = "prompt-jobs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_prompt_job(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptJobService>>,
    AppJson(dto): AppJson<CreatePromptJobDto>,
) -> Result<(StatusCode, Json<ApiResponse<PromptJobResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let job = service.create(user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(Some(job), None))))
}

/// List the caller's prompt jobs
#[utoipa::path(
    get,
    path = "/api/prompt-jobs",
    responses(
        (status = 200, description = "Prompt jobs retrieved successfully", body = ApiResponse<ListResponse<PromptJobResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "prompt-jobs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_prompt_jobs(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptJobService>>,
) -> Result<Json<ApiResponse<ListResponse<PromptJobResponseDto>>>> {
    let jobs = service.list(user.user_id()).await?;
    Ok(Json(ApiResponse::success(Some(jobs.into()), None)))
}
