use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Prompt job status enum matching database enum.
///
/// Set once when the job is recorded; nothing transitions it afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "prompt_job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PromptJobStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

impl std::fmt::Display for PromptJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptJobStatus::Pending => write!(f, "pending"),
            PromptJobStatus::Completed => write!(f, "completed"),
            PromptJobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Database model for a recorded generation attempt
#[derive(Debug, Clone, FromRow)]
pub struct PromptJob {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub template_id: Option<Uuid>,
    pub input: Option<serde_json::Value>,
    pub output: Option<serde_json::Value>,
    pub status: PromptJobStatus,
    pub created_at: DateTime<Utc>,
}
