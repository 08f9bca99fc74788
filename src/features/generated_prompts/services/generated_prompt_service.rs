use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::generated_prompts::dtos::{
    CreateGeneratedPromptDto, GeneratedPromptQueryParams, GeneratedPromptResponseDto,
};
use crate::features::generated_prompts::models::GeneratedPrompt;
use crate::features::prompt_templates::PromptTemplateService;

/// Service for recording and listing generated prompts
pub struct GeneratedPromptService {
    pool: PgPool,
    templates: Arc<PromptTemplateService>,
}

impl GeneratedPromptService {
    pub fn new(pool: PgPool, templates: Arc<PromptTemplateService>) -> Self {
        Self { pool, templates }
    }

    /// Record a generated prompt for the caller. A referenced template must
    /// be accessible before anything is inserted.
    pub async fn create(
        &self,
        user_id: &str,
        dto: CreateGeneratedPromptDto,
    ) -> Result<GeneratedPromptResponseDto> {
        if let Some(template_id) = dto.template_id {
            self.templates.find_accessible(template_id, user_id).await?;
        }

        let prompt = sqlx::query_as::<_, GeneratedPrompt>(
            r#"
            INSERT INTO generated_prompts (template_id, user_id, input, prompt_text, meta)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, template_id, user_id, input, prompt_text, meta, created_at
            "#,
        )
        .bind(dto.template_id)
        .bind(user_id)
        .bind(&dto.input)
        .bind(&dto.prompt_text)
        .bind(&dto.meta)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Generated prompt recorded: id={}, user_id={}, template_id={:?}",
            prompt.id,
            user_id,
            prompt.template_id
        );

        Ok(prompt.into())
    }

    /// Get one of the caller's own prompts
    pub async fn get(&self, id: Uuid, user_id: &str) -> Result<GeneratedPromptResponseDto> {
        let prompt = sqlx::query_as::<_, GeneratedPrompt>(
            r#"
            SELECT id, template_id, user_id, input, prompt_text, meta, created_at
            FROM generated_prompts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch generated prompt {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Generated prompt with id {} not found", id)))?;

        Ok(prompt.into())
    }

    /// List the caller's prompts, optionally narrowed to one template
    pub async fn list(
        &self,
        user_id: &str,
        params: &GeneratedPromptQueryParams,
    ) -> Result<Vec<GeneratedPromptResponseDto>> {
        let prompts = sqlx::query_as::<_, GeneratedPrompt>(
            r#"
            SELECT id, template_id, user_id, input, prompt_text, meta, created_at
            FROM generated_prompts
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR template_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(params.template_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list generated prompts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(prompts.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prompt_templates::dtos::CreatePromptTemplateDto;
    use serde_json::json;

    fn services(pool: PgPool) -> (Arc<PromptTemplateService>, GeneratedPromptService) {
        let templates = Arc::new(PromptTemplateService::new(pool.clone()));
        let prompts = GeneratedPromptService::new(pool, Arc::clone(&templates));
        (templates, prompts)
    }

    async fn create_template(templates: &PromptTemplateService, owner: &str) -> Uuid {
        templates
            .create(
                owner,
                CreatePromptTemplateDto {
                    title: "Lesson hook".to_string(),
                    description: None,
                    template: "Open a lesson on {topic}".to_string(),
                    tags: None,
                    is_active: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    fn prompt_dto(template_id: Option<Uuid>, text: &str) -> CreateGeneratedPromptDto {
        CreateGeneratedPromptDto {
            template_id,
            input: Some(json!({ "topic": "volcanoes" })),
            prompt_text: text.to_string(),
            meta: None,
        }
    }

    async fn count_prompts(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM generated_prompts")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_with_foreign_template_forbidden_and_not_inserted(pool: PgPool) {
        let (templates, prompts) = services(pool.clone());
        let template_id = create_template(&templates, "user-a").await;

        let err = prompts
            .create("user-b", prompt_dto(Some(template_id), "Open a lesson"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(count_prompts(&pool).await, 0);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_with_unknown_template_not_found(pool: PgPool) {
        let (_, prompts) = services(pool.clone());

        let err = prompts
            .create("user-a", prompt_dto(Some(Uuid::new_v4()), "text"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(count_prompts(&pool).await, 0);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_scoped_to_caller(pool: PgPool) {
        let (templates, prompts) = services(pool);
        let template_id = create_template(&templates, "user-a").await;

        prompts
            .create("user-a", prompt_dto(Some(template_id), "a1"))
            .await
            .unwrap();
        prompts.create("user-a", prompt_dto(None, "a2")).await.unwrap();
        prompts.create("user-b", prompt_dto(None, "b1")).await.unwrap();

        let all = prompts
            .list("user-a", &GeneratedPromptQueryParams::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|p| p.user_id.as_deref() == Some("user-a")));

        let filtered = prompts
            .list(
                "user-a",
                &GeneratedPromptQueryParams {
                    template_id: Some(template_id),
                },
            )
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].prompt_text, "a1");

        let other = prompts
            .list(
                "user-b",
                &GeneratedPromptQueryParams {
                    template_id: Some(template_id),
                },
            )
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_get_other_users_prompt_not_found(pool: PgPool) {
        let (_, prompts) = services(pool);
        let created = prompts.create("user-a", prompt_dto(None, "mine")).await.unwrap();

        assert_eq!(prompts.get(created.id, "user-a").await.unwrap().id, created.id);
        let err = prompts.get(created.id, "user-b").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
