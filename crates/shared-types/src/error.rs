use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured application error shared by every crate in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Error text for a single form field, if any.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    /// Message suitable for a toast or banner.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_error_has_correct_kind() {
        let err = AppError::bad_request("broken config");
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "broken config");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("guests".to_string(), "Minimum 1 guest".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("guests"), Some("Minimum 1 guest"));
        assert_eq!(err.field("rooms"), None);
    }

    #[test]
    fn friendly_message_falls_back_when_blank() {
        assert_eq!(
            AppError::bad_request("  ").friendly_message(),
            "Something went wrong. Please try again."
        );
        assert_eq!(AppError::bad_request("Nope").friendly_message(), "Nope");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::bad_request("missing name");
        assert_eq!(format!("{}", err), "BadRequest: missing name");
    }

    #[test]
    fn error_json_omits_empty_field_errors() {
        let json = serde_json::to_string(&AppError::bad_request("x")).unwrap();
        assert!(!json.contains("field_errors"));

        let parsed: AppError = serde_json::from_str(r#"{"kind":"BadRequest","message":"x"}"#).unwrap();
        assert_eq!(parsed, AppError::bad_request("x"));
    }
}
