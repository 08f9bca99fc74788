use crate::core::error::Result;
use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;
use axum::{routing::get, Json, Router};

/// Return the identity the current bearer token resolves to
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None)))
}

/// Protected auth routes (require JWT authentication)
pub fn routes() -> Router {
    Router::new().route("/api/auth/me", get(get_me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_test_user_auth, TEST_USER_ID};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_me_requires_authentication() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/api/auth/me").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_me_returns_caller_identity() {
        let server = TestServer::new(with_test_user_auth(routes())).unwrap();

        let response = server.get("/api/auth/me").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["userId"], TEST_USER_ID);
    }
}
