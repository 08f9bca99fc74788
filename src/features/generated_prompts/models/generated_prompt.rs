use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a generated prompt. Rows are never updated.
#[derive(Debug, Clone, FromRow)]
pub struct GeneratedPrompt {
    pub id: Uuid,
    pub template_id: Option<Uuid>,
    pub user_id: Option<String>,
    pub input: Option<serde_json::Value>,
    pub prompt_text: String,
    pub meta: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
