use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::favorites::models::UserPromptFavorite;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteDto {
    pub prompt_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub prompt_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<UserPromptFavorite> for FavoriteResponseDto {
    fn from(f: UserPromptFavorite) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            prompt_id: f.prompt_id,
            created_at: f.created_at,
        }
    }
}
