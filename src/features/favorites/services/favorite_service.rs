use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::favorites::dtos::FavoriteResponseDto;
use crate::features::favorites::models::UserPromptFavorite;

/// Service for favorite prompts.
///
/// Adding is idempotent (an existing favorite is returned as-is); removing
/// is not (a second removal reports `NotFound`).
pub struct FavoriteService {
    pool: PgPool,
}

impl FavoriteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find(&self, user_id: &str, prompt_id: Uuid) -> Result<Option<UserPromptFavorite>> {
        sqlx::query_as::<_, UserPromptFavorite>(
            r#"
            SELECT id, user_id, prompt_id, created_at
            FROM user_prompt_favorites
            WHERE user_id = $1 AND prompt_id = $2
            "#,
        )
        .bind(user_id)
        .bind(prompt_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch favorite: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Favorite one of the caller's own prompts
    pub async fn add(&self, user_id: &str, prompt_id: Uuid) -> Result<FavoriteResponseDto> {
        let owns_prompt: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM generated_prompts WHERE id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(prompt_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check prompt ownership: {:?}", e);
            AppError::Database(e)
        })?;

        if !owns_prompt {
            return Err(AppError::NotFound(format!(
                "Generated prompt with id {} not found",
                prompt_id
            )));
        }

        if let Some(existing) = self.find(user_id, prompt_id).await? {
            return Ok(existing.into());
        }

        // A concurrent add may win between the check above and this insert;
        // the unique index turns that into a no-op and the winner is re-read.
        let inserted = sqlx::query_as::<_, UserPromptFavorite>(
            r#"
            INSERT INTO user_prompt_favorites (user_id, prompt_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, prompt_id) DO NOTHING
            RETURNING id, user_id, prompt_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(prompt_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        let favorite = match inserted {
            Some(favorite) => {
                tracing::info!(
                    "Favorite added: user_id={}, prompt_id={}",
                    user_id,
                    prompt_id
                );
                favorite
            }
            None => self.find(user_id, prompt_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Favorite for prompt {} not found", prompt_id))
            })?,
        };

        Ok(favorite.into())
    }

    /// Remove a favorite. Fails with NotFound when nothing was deleted.
    pub async fn remove(&self, user_id: &str, prompt_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_prompt_favorites
            WHERE user_id = $1 AND prompt_id = $2
            "#,
        )
        .bind(user_id)
        .bind(prompt_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to remove favorite: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Favorite for prompt {} not found",
                prompt_id
            )));
        }

        tracing::info!(
            "Favorite removed: user_id={}, prompt_id={}",
            user_id,
            prompt_id
        );

        Ok(())
    }

    /// List all of the caller's favorites, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<FavoriteResponseDto>> {
        let favorites = sqlx::query_as::<_, UserPromptFavorite>(
            r#"
            SELECT id, user_id, prompt_id, created_at
            FROM user_prompt_favorites
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list favorites: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(favorites.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::generated_prompts::dtos::{
        CreateGeneratedPromptDto, GeneratedPromptQueryParams,
    };
    use crate::features::generated_prompts::GeneratedPromptService;
    use crate::features::prompt_templates::dtos::CreatePromptTemplateDto;
    use crate::features::prompt_templates::PromptTemplateService;
    use std::sync::Arc;

    async fn insert_prompt(pool: &PgPool, user_id: &str) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO generated_prompts (user_id, prompt_text) VALUES ($1, 'text') RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn count_favorites(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_prompt_favorites")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_add_twice_returns_same_row(pool: PgPool) {
        let service = FavoriteService::new(pool.clone());
        let prompt_id = insert_prompt(&pool, "user-a").await;

        let first = service.add("user-a", prompt_id).await.unwrap();
        let second = service.add("user-a", prompt_id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(count_favorites(&pool).await, 1);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_add_other_users_prompt_not_found(pool: PgPool) {
        let service = FavoriteService::new(pool.clone());
        let prompt_id = insert_prompt(&pool, "user-a").await;

        let err = service.add("user-b", prompt_id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.add("user-b", Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(count_favorites(&pool).await, 0);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_remove_twice_second_is_not_found(pool: PgPool) {
        let service = FavoriteService::new(pool.clone());
        let prompt_id = insert_prompt(&pool, "user-a").await;
        service.add("user-a", prompt_id).await.unwrap();

        service.remove("user-a", prompt_id).await.unwrap();
        let err = service.remove("user-a", prompt_id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_template_to_favorite_flow(pool: PgPool) {
        let templates = Arc::new(PromptTemplateService::new(pool.clone()));
        let prompts = GeneratedPromptService::new(pool.clone(), Arc::clone(&templates));
        let favorites = FavoriteService::new(pool);

        let template = templates
            .create(
                "user-a",
                CreatePromptTemplateDto {
                    title: "Discussion starter".to_string(),
                    description: None,
                    template: "Ask the class about {topic}".to_string(),
                    tags: None,
                    is_active: Some(true),
                },
            )
            .await
            .unwrap();

        let prompt = prompts
            .create(
                "user-a",
                CreateGeneratedPromptDto {
                    template_id: Some(template.id),
                    input: Some(serde_json::json!({ "topic": "erosion" })),
                    prompt_text: "Ask the class about erosion".to_string(),
                    meta: None,
                },
            )
            .await
            .unwrap();

        favorites.add("user-a", prompt.id).await.unwrap();

        let listed = favorites.list("user-a").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].prompt_id, prompt.id);

        let own_prompts = prompts
            .list("user-a", &GeneratedPromptQueryParams::default())
            .await
            .unwrap();
        assert_eq!(own_prompts.len(), 1);
    }
}
