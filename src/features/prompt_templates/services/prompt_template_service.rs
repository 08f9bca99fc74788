use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::prompt_templates::dtos::{
    CreatePromptTemplateDto, PromptTemplateQueryParams, PromptTemplateResponseDto,
    UpdatePromptTemplateDto,
};
use crate::features::prompt_templates::models::{ensure_accessible, PromptTemplate};

/// Service for prompt template operations.
///
/// Also owns the template accessibility check used by generated prompts and
/// prompt jobs before they reference a template.
pub struct PromptTemplateService {
    pool: PgPool,
}

impl PromptTemplateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a template the caller may use: NotFound if missing, Forbidden if
    /// it belongs to another user.
    pub async fn find_accessible(&self, id: Uuid, user_id: &str) -> Result<PromptTemplate> {
        let template = sqlx::query_as::<_, PromptTemplate>(
            r#"
            SELECT id, owner_id, title, description, template, tags, is_active,
                   created_at, updated_at
            FROM prompt_templates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch prompt template {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        ensure_accessible(template, id, user_id)
    }

    /// Create a template owned by the caller
    pub async fn create(
        &self,
        user_id: &str,
        dto: CreatePromptTemplateDto,
    ) -> Result<PromptTemplateResponseDto> {
        let template = sqlx::query_as::<_, PromptTemplate>(
            r#"
            INSERT INTO prompt_templates (owner_id, title, description, template, tags, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_id, title, description, template, tags, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.template)
        .bind(&dto.tags)
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Prompt template created: id={}, owner_id={}",
            template.id,
            user_id
        );

        Ok(template.into())
    }

    /// Get a single template visible to the caller
    pub async fn get(&self, id: Uuid, user_id: &str) -> Result<PromptTemplateResponseDto> {
        Ok(self.find_accessible(id, user_id).await?.into())
    }

    /// Apply a partial update. Access is checked before any write.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: &str,
        dto: UpdatePromptTemplateDto,
    ) -> Result<PromptTemplateResponseDto> {
        self.find_accessible(id, user_id).await?;

        let template = sqlx::query_as::<_, PromptTemplate>(
            r#"
            UPDATE prompt_templates
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                template = COALESCE($3, template),
                tags = COALESCE($4, tags),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, owner_id, title, description, template, tags, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.template)
        .bind(&dto.tags)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("Prompt template with id {} not found", id)))?;

        tracing::info!("Prompt template updated: id={}, by={}", id, user_id);

        Ok(template.into())
    }

    /// List the caller's templates plus shared ones, newest first
    pub async fn list(
        &self,
        user_id: &str,
        params: &PromptTemplateQueryParams,
    ) -> Result<Vec<PromptTemplateResponseDto>> {
        let templates = sqlx::query_as::<_, PromptTemplate>(
            r#"
            SELECT id, owner_id, title, description, template, tags, is_active,
                   created_at, updated_at
            FROM prompt_templates
            WHERE (owner_id = $1 OR owner_id IS NULL)
              AND ($2 OR is_active = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(params.include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list prompt templates: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(templates.into_iter().map(Into::into).collect())
    }
}
