use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::prompt_jobs::models::{PromptJob, PromptJobStatus};
use crate::shared::validation::validate_json_object;

/// Request DTO for recording a prompt job
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptJobDto {
    pub template_id: Option<Uuid>,

    #[validate(custom(function = "validate_json_object"))]
    pub input: Option<serde_json::Value>,

    #[validate(custom(function = "validate_json_object"))]
    pub output: Option<serde_json::Value>,

    /// Defaults to `completed`
    pub status: Option<PromptJobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptJobResponseDto {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub template_id: Option<Uuid>,
    pub input: Option<serde_json::Value>,
    pub output: Option<serde_json::Value>,
    pub status: PromptJobStatus,
    pub created_at: DateTime<Utc>,
}

impl From<PromptJob> for PromptJobResponseDto {
    fn from(j: PromptJob) -> Self {
        Self {
            id: j.id,
            user_id: j.user_id,
            template_id: j.template_id,
            input: j.input,
            output: j.output,
            status: j.status,
            created_at: j.created_at,
        }
    }
}
