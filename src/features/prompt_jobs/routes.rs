use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::prompt_jobs::{handlers, services::PromptJobService};

/// Create routes for prompt jobs
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<PromptJobService>) -> Router {
    Router::new()
        .route(
            "/api/prompt-jobs",
            post(handlers::create_prompt_job).get(handlers::list_prompt_jobs),
        )
        .with_state(service)
}
