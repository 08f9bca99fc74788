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
use crate::features::prompt_templates::dtos::{
    CreatePromptTemplateDto, PromptTemplateQueryParams, PromptTemplateResponseDto,
    UpdatePromptTemplateDto,
};
use crate::features::prompt_templates::services::PromptTemplateService;
use crate::shared::types::{ApiResponse, ListResponse};

/// Create a prompt template owned by the caller
#[utoipa::path(
    post,
    path = "/api/prompt-templates",
    request_body = CreatePromptTemplateDto,
    responses(
        (status = 201, description = "Prompt template created successfully", body = ApiResponse<PromptTemplateResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "prompt-templates",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_prompt_template(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptTemplateService>>,
    AppJson(dto): AppJson<CreatePromptTemplateDto>,
) -> Result<(StatusCode, Json<ApiResponse<PromptTemplateResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let template = service.create(user.user_id(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(template), None)),
    ))
}

/// Get a prompt template visible to the caller
#[utoipa::path(
    get,
    path = "/api/prompt-templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt template ID")
    ),
    responses(
        (status = 200, description = "Prompt template retrieved successfully", body = ApiResponse<PromptTemplateResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Template belongs to another user"),
        (status = 404, description = "Prompt template not found")
    ),
    tag = "prompt-templates",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_prompt_template(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptTemplateService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PromptTemplateResponseDto>>> {
    let template = service.get(id, user.user_id()).await?;
    Ok(Json(ApiResponse::success(Some(template), None)))
}

/// List the caller's templates and shared templates
#[utoipa::path(
    get,
    path = "/api/prompt-templates",
    params(PromptTemplateQueryParams),
    responses(
        (status = 200, description = "Prompt templates retrieved successfully", body = ApiResponse<ListResponse<PromptTemplateResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "prompt-templates",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_prompt_templates(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptTemplateService>>,
    AppQuery(params): AppQuery<PromptTemplateQueryParams>,
) -> Result<Json<ApiResponse<ListResponse<PromptTemplateResponseDto>>>> {
    let templates = service.list(user.user_id(), &params).await?;
    Ok(Json(ApiResponse::success(Some(templates.into()), None)))
}

/// Partially update a prompt template
#[utoipa::path(
    patch,
    path = "/api/prompt-templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt template ID")
    ),
    request_body = UpdatePromptTemplateDto,
    responses(
        (status = 200, description = "Prompt template updated successfully", body = ApiResponse<PromptTemplateResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Template belongs to another user"),
        (status = 404, description = "Prompt template not found")
    ),
    tag = "prompt-templates",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_prompt_template(
    user: AuthenticatedUser,
    State(service): State<Arc<PromptTemplateService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdatePromptTemplateDto>,
) -> Result<Json<ApiResponse<PromptTemplateResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let template = service.update(id, user.user_id(), dto).await?;
    Ok(Json(ApiResponse::success(Some(template), None)))
}

#[cfg(test)]
mod tests {
    use crate::features::prompt_templates::{routes, PromptTemplateService};
    use crate::shared::test_helpers::{lazy_pool, with_test_user_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn server(authenticated: bool) -> TestServer {
        let router = routes::routes(Arc::new(PromptTemplateService::new(lazy_pool())));
        let router = if authenticated {
            with_test_user_auth(router)
        } else {
            router
        };
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_authentication() {
        let response = server(false)
            .post("/api/prompt-templates")
            .json(&json!({ "title": "Quiz", "template": "body" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_list_requires_authentication() {
        let response = server(false).get("/api/prompt-templates").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_empty_title_rejected_before_storage() {
        let response = server(true)
            .post("/api/prompt-templates")
            .json(&json!({ "title": "", "template": "Explain {idea}" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_empty_body_rejected_before_storage() {
        let response = server(true)
            .post("/api/prompt-templates")
            .json(&json!({ "title": "Warm-up", "template": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_missing_field_is_validation_error() {
        let response = server(true)
            .post("/api/prompt-templates")
            .json(&json!({ "title": "No body" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_nul_title_rejected_before_storage() {
        let response = server(true)
            .post("/api/prompt-templates")
            .json(&json!({ "title": "Quiz\u{0}", "template": "body" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_nul_tag_rejected_before_storage() {
        let response = server(true)
            .patch(&format!("/api/prompt-templates/{}", uuid::Uuid::new_v4()))
            .json(&json!({ "tags": ["math\u{0}"] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_bad_request() {
        let response = server(true)
            .post("/api/prompt-templates")
            .bytes(axum::body::Bytes::from_static(b"{\"title\": "))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_update_without_fields_rejected_before_storage() {
        let response = server(true)
            .patch(&format!("/api/prompt-templates/{}", uuid::Uuid::new_v4()))
            .json(&json!({}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_flag() {
        let response = server(true)
            .get("/api/prompt-templates?includeInactive=maybe")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    }
}
