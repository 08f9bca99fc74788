use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// Database model for a prompt template.
///
/// Templates without an owner are shared with every user.
#[derive(Debug, Clone, FromRow)]
pub struct PromptTemplate {
    pub id: Uuid,
    pub owner_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub template: String,
    pub tags: Option<Vec<String>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PromptTemplate {
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        is_visible_to(self.owner_id.as_deref(), user_id)
    }
}

/// A row is visible when it has no owner or the owner is the caller.
pub fn is_visible_to(owner_id: Option<&str>, user_id: &str) -> bool {
    match owner_id {
        None => true,
        Some(owner) => owner == user_id,
    }
}

/// Map a template lookup onto the access taxonomy: missing rows are
/// `NotFound`, rows owned by someone else are `Forbidden`.
pub fn ensure_accessible(
    template: Option<PromptTemplate>,
    id: Uuid,
    user_id: &str,
) -> Result<PromptTemplate> {
    let template = template
        .ok_or_else(|| AppError::NotFound(format!("Prompt template with id {} not found", id)))?;

    if !template.is_visible_to(user_id) {
        return Err(AppError::Forbidden(
            "You do not have access to this prompt template".to_string(),
        ));
    }

    Ok(template)
}
