use axum::{
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::features::favorites::{handlers, services::FavoriteService};

/// Create routes for favorite prompts
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<FavoriteService>) -> Router {
    Router::new()
        .route(
            "/api/favorite-prompts",
            post(handlers::add_favorite_prompt).get(handlers::list_favorite_prompts),
        )
        .route(
            "/api/favorite-prompts/{prompt_id}",
            delete(handlers::remove_favorite_prompt),
        )
        .with_state(service)
}
