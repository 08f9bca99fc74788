use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::favorites::dtos::{AddFavoriteDto, FavoriteResponseDto};
use crate::features::favorites::services::FavoriteService;
use crate::shared::types::{ApiResponse, ListResponse};

/// Favorite one of the caller's generated prompts (idempotent)
#[utoipa::path(
    post,
    path = "/api/favorite-prompts",
    request_body = AddFavoriteDto,
    responses(
        (status = 200, description = "Favorite row, existing or newly created", body = ApiResponse<FavoriteResponseDto>),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Prompt not found for this user")
    ),
    tag = "favorites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_favorite_prompt(
    user: AuthenticatedUser,
    State(service): State<Arc<FavoriteService>>,
    AppJson(dto): AppJson<AddFavoriteDto>,
) -> Result<Json<ApiResponse<FavoriteResponseDto>>> {
    let favorite = service.add(user.user_id(), dto.prompt_id).await?;
    Ok(Json(ApiResponse::success(Some(favorite), None)))
}

/// Remove a favorite. Removing a favorite that does not exist is an error.
#[utoipa::path(
    delete,
    path = "/api/favorite-prompts/{prompt_id}",
    params(
        ("prompt_id" = Uuid, Path, description = "Generated prompt ID")
    ),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite not found")
    ),
    tag = "favorites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn remove_favorite_prompt(
    user: AuthenticatedUser,
    State(service): State<Arc<FavoriteService>>,
    Path(prompt_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(user.user_id(), prompt_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Favorite removed".to_string()),
    )))
}

/// List the caller's favorites
#[utoipa::path(
    get,
    path = "/api/favorite-prompts",
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = ApiResponse<ListResponse<FavoriteResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "favorites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_favorite_prompts(
    user: AuthenticatedUser,
    State(service): State<Arc<FavoriteService>>,
) -> Result<Json<ApiResponse<ListResponse<FavoriteResponseDto>>>> {
    let favorites = service.list(user.user_id()).await?;
    Ok(Json(ApiResponse::success(Some(favorites.into()), None)))
}
