use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::prompt_templates::{handlers, services::PromptTemplateService};

/// Create routes for prompt template management
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<PromptTemplateService>) -> Router {
    Router::new()
        .route(
            "/api/prompt-templates",
            post(handlers::create_prompt_template).get(handlers::list_prompt_templates),
        )
        .route(
            "/api/prompt-templates/{id}",
            get(handlers::get_prompt_template).patch(handlers::update_prompt_template),
        )
        .with_state(service)
}
