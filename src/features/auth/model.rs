use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller identity resolved from a validated access token.
///
/// `account_id` is the id stamped into `owner_id`/`user_id` columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub account_id: String,
    pub sub: String,
    /// Session UID (only present for interactive OIDC flows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_uid: Option<String>,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.account_id
    }
}
