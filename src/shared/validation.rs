use validator::ValidationError;

fn nul_error() -> ValidationError {
    ValidationError::new("nul_byte").with_message("must not contain NUL characters".into())
}

fn contains_nul(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::String(s) => s.contains('\0'),
        serde_json::Value::Array(items) => items.iter().any(contains_nul),
        serde_json::Value::Object(map) => map
            .iter()
            .any(|(key, v)| key.contains('\0') || contains_nul(v)),
        _ => false,
    }
}

/// Opaque payloads (`input`, `meta`, `output`) must be JSON objects.
/// Postgres cannot store `\u0000` in JSONB, so no key or string may carry it.
pub fn validate_json_object(value: &serde_json::Value) -> Result<(), ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::new("json_object").with_message("must be a JSON object".into()));
    }
    if contains_nul(value) {
        return Err(nul_error());
    }
    Ok(())
}

/// Free text accepted as-is, minus NUL characters.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(nul_error());
    }
    Ok(())
}

/// Rejects strings that are empty, whitespace only or contain NUL.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be empty".into()));
    }
    validate_text(value)
}

/// Tags must not contain blank entries.
pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|t| t.trim().is_empty()) {
        return Err(ValidationError::new("tags").with_message("tags must not be blank".into()));
    }
    tags.iter().try_for_each(|t| validate_text(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_valid() {
        assert!(validate_json_object(&json!({})).is_ok());
        assert!(validate_json_object(&json!({"grade": 5, "topic": "fractions"})).is_ok());
    }

    #[test]
    fn test_json_object_invalid() {
        assert!(validate_json_object(&json!([])).is_err());
        assert!(validate_json_object(&json!("text")).is_err());
        assert!(validate_json_object(&json!(42)).is_err());
        assert!(validate_json_object(&json!(null)).is_err());
    }

    #[test]
    fn test_json_object_nul_anywhere_rejected() {
        assert!(validate_json_object(&json!({"topic": "a\u{0}b"})).is_err());
        assert!(validate_json_object(&json!({"a\u{0}": 1})).is_err());
        assert!(validate_json_object(&json!({"steps": [{"text": ["ok", "x\u{0}"]}]})).is_err());
        assert!(validate_json_object(&json!({"steps": [{"text": ["ok"]}]})).is_ok());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Lesson warm-up").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n").is_err());
        assert!(validate_not_blank("Quiz\u{0}").is_err());
    }

    #[test]
    fn test_text() {
        assert!(validate_text("").is_ok());
        assert!(validate_text("Warm-up for grade 5").is_ok());
        assert!(validate_text("\u{0}").is_err());
    }

    #[test]
    fn test_tags() {
        assert!(validate_tags(&[]).is_ok());
        assert!(validate_tags(&["math".to_string(), "grade 5".to_string()]).is_ok());
        assert!(validate_tags(&["math".to_string(), "  ".to_string()]).is_err());
        assert!(validate_tags(&["ma\u{0}th".to_string()]).is_err());
    }
}
