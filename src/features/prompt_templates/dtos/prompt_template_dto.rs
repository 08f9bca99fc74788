use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::prompt_templates::models::PromptTemplate;
use crate::shared::validation::{validate_not_blank, validate_tags, validate_text};

// Query params for listing templates
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PromptTemplateQueryParams {
    /// Include templates with `isActive = false` (default: false)
    #[serde(default)]
    pub include_inactive: bool,
}

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptTemplateDto {
    #[validate(
        length(max = 200, message = "Title must not exceed 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(max = 2000, message = "Description must not exceed 2000 characters"),
        custom(function = "validate_text")
    )]
    pub description: Option<String>,

    /// Template body with placeholders
    #[validate(custom(function = "validate_not_blank"))]
    pub template: String,

    #[validate(
        length(max = 20, message = "At most 20 tags are allowed"),
        custom(function = "validate_tags")
    )]
    pub tags: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

/// Partial update: omitted (or null) fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdatePromptTemplateDto {
    #[validate(
        length(max = 200, message = "Title must not exceed 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(max = 2000, message = "Description must not exceed 2000 characters"),
        custom(function = "validate_text")
    )]
    pub description: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub template: Option<String>,

    #[validate(
        length(max = 20, message = "At most 20 tags are allowed"),
        custom(function = "validate_tags")
    )]
    pub tags: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

impl UpdatePromptTemplateDto {
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.template.is_some()
            || self.tags.is_some()
            || self.is_active.is_some()
    }
}

fn validate_has_changes(dto: &UpdatePromptTemplateDto) -> Result<(), ValidationError> {
    if dto.has_changes() {
        Ok(())
    } else {
        Err(ValidationError::new("no_changes")
            .with_message("At least one field must be provided".into()))
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplateResponseDto {
    pub id: Uuid,
    /// Absent for shared templates
    pub owner_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub template: String,
    pub tags: Option<Vec<String>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PromptTemplate> for PromptTemplateResponseDto {
    fn from(t: PromptTemplate) -> Self {
        Self {
            id: t.id,
            owner_id: t.owner_id,
            title: t.title,
            description: t.description,
            template: t.template,
            tags: t.tags,
            is_active: t.is_active,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
