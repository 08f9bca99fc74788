use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope for every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    /// Stable error code, only present on failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// List payload: `total` is always the length of `items`, not a global count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len() as i64;
        Self { items, total }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            code: None,
            errors: None,
        }
    }

    pub fn error(
        message: Option<String>,
        code: Option<String>,
        errors: Option<Vec<String>>,
    ) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            code,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_total_matches_items() {
        let list = ListResponse::new(vec!["a", "b", "c"]);
        assert_eq!(list.total, 3);
        assert_eq!(list.items.len(), 3);

        let empty: ListResponse<u8> = Vec::new().into();
        assert_eq!(empty.total, 0);
    }

    #[test]
    fn test_success_envelope_omits_code() {
        let body = serde_json::to_value(ApiResponse::success(Some(1), None)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert!(body.get("code").is_none());
    }

    #[test]
    fn test_error_envelope_carries_code() {
        let body = serde_json::to_value(ApiResponse::<()>::error(
            Some("missing".to_string()),
            Some("NOT_FOUND".to_string()),
            None,
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body["data"].is_null());
    }
}
