use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::generated_prompts::{handlers, services::GeneratedPromptService};

/// Create routes for generated prompts
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<GeneratedPromptService>) -> Router {
    Router::new()
        .route(
            "/api/generated-prompts",
            post(handlers::create_generated_prompt).get(handlers::list_generated_prompts),
        )
        .route(
            "/api/generated-prompts/{id}",
            get(handlers::get_generated_prompt),
        )
        .with_state(service)
}
