use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::generated_prompts::models::GeneratedPrompt;
use crate::shared::validation::{validate_json_object, validate_not_blank};

/// Request DTO for recording a generated prompt
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeneratedPromptDto {
    /// Template the prompt was produced from, if any
    pub template_id: Option<Uuid>,

    /// Values that were substituted into the template
    #[validate(custom(function = "validate_json_object"))]
    pub input: Option<serde_json::Value>,

    #[validate(custom(function = "validate_not_blank"))]
    pub prompt_text: String,

    /// Free-form metadata (model, token counts, ...)
    #[validate(custom(function = "validate_json_object"))]
    pub meta: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GeneratedPromptQueryParams {
    /// Only return prompts generated from this template
    pub template_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPromptResponseDto {
    pub id: Uuid,
    pub template_id: Option<Uuid>,
    pub user_id: Option<String>,
    pub input: Option<serde_json::Value>,
    pub prompt_text: String,
    pub meta: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedPrompt> for GeneratedPromptResponseDto {
    fn from(p: GeneratedPrompt) -> Self {
        Self {
            id: p.id,
            template_id: p.template_id,
            user_id: p.user_id,
            input: p.input,
            prompt_text: p.prompt_text,
            meta: p.meta,
            created_at: p.created_at,
        }
    }
}
