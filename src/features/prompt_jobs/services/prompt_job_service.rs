use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::prompt_jobs::dtos::{CreatePromptJobDto, PromptJobResponseDto};
use crate::features::prompt_jobs::models::PromptJob;
use crate::features::prompt_templates::PromptTemplateService;

/// Service for the prompt job history
pub struct PromptJobService {
    pool: PgPool,
    templates: Arc<PromptTemplateService>,
}

impl PromptJobService {
    pub fn new(pool: PgPool, templates: Arc<PromptTemplateService>) -> Self {
        Self { pool, templates }
    }

    /// Record a job for the caller. Status defaults to `completed`.
    pub async fn create(
        &self,
        user_id: &str,
        dto: CreatePromptJobDto,
    ) -> Result<PromptJobResponseDto> {
        if let Some(template_id) = dto.template_id {
            self.templates.find_accessible(template_id, user_id).await?;
        }

        let status = dto.status.unwrap_or_default();

        let job = sqlx::query_as::<_, PromptJob>(
            r#"
            INSERT INTO prompt_jobs (user_id, template_id, input, output, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, template_id, input, output, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(dto.template_id)
        .bind(&dto.input)
        .bind(&dto.output)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Prompt job recorded: id={}, user_id={}, status={}",
            job.id,
            user_id,
            job.status
        );

        Ok(job.into())
    }

    /// List the caller's jobs, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<PromptJobResponseDto>> {
        let jobs = sqlx::query_as::<_, PromptJob>(
            r#"
            SELECT id, user_id, template_id, input, output, status, created_at
            FROM prompt_jobs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list prompt jobs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(jobs.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prompt_jobs::models::PromptJobStatus;
    use crate::features::prompt_templates::dtos::CreatePromptTemplateDto;
    use serde_json::json;

    fn services(pool: PgPool) -> (Arc<PromptTemplateService>, PromptJobService) {
        let templates = Arc::new(PromptTemplateService::new(pool.clone()));
        let jobs = PromptJobService::new(pool, Arc::clone(&templates));
        (templates, jobs)
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_status_defaults_to_completed(pool: PgPool) {
        let (_, jobs) = services(pool);

        let job = jobs
            .create(
                "user-a",
                CreatePromptJobDto {
                    input: Some(json!({ "topic": "tides" })),
                    output: Some(json!({ "text": "..." })),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(job.status, PromptJobStatus::Completed);
        assert_eq!(job.user_id.as_deref(), Some("user-a"));
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_explicit_status_kept(pool: PgPool) {
        let (_, jobs) = services(pool);

        let job = jobs
            .create(
                "user-a",
                CreatePromptJobDto {
                    status: Some(PromptJobStatus::Failed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(job.status, PromptJobStatus::Failed);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_foreign_template_forbidden_and_not_inserted(pool: PgPool) {
        let (templates, jobs) = services(pool.clone());
        let template = templates
            .create(
                "user-a",
                CreatePromptTemplateDto {
                    title: "Private".to_string(),
                    description: None,
                    template: "body".to_string(),
                    tags: None,
                    is_active: None,
                },
            )
            .await
            .unwrap();

        let err = jobs
            .create(
                "user-b",
                CreatePromptJobDto {
                    template_id: Some(template.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prompt_jobs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_scoped_to_caller(pool: PgPool) {
        let (_, jobs) = services(pool);
        jobs.create("user-a", CreatePromptJobDto::default())
            .await
            .unwrap();
        jobs.create("user-b", CreatePromptJobDto::default())
            .await
            .unwrap();

        let listed = jobs.list("user-a").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id.as_deref(), Some("user-a"));
    }
}
