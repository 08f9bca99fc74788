use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's bookmark on one of their own generated prompts
#[derive(Debug, Clone, FromRow)]
pub struct UserPromptFavorite {
    pub id: Uuid,
    pub user_id: String,
    pub prompt_id: Uuid,
    pub created_at: DateTime<Utc>,
}
