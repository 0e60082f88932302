use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::AppError;

/// Role of the signed-in user, governing which navigation links are visible.
///
/// - `Admin`: dashboard, task and user management.
/// - `Worker`: their own task list.
/// - `None`: unknown or missing role. No navigation is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Worker,
    #[default]
    None,
}

/// All selectable roles in display order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Worker, UserRole::None];

impl UserRole {
    /// Parse the role claim from the identity provider. Unknown values map to `None`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "worker" => UserRole::Worker,
            _ => UserRole::None,
        }
    }

    /// Lowercase string as carried in the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Worker => "worker",
            UserRole::None => "none",
        }
    }

    /// Human-readable name for pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Worker => "Worker",
            UserRole::None => "No role",
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from_str_or_default(&s)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in user as exposed by the identity provider.
/// Read-only from the UI's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl SessionUser {
    /// Name for greetings, falling back to "Guest".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Guest")
    }
}

/// Sign-in form payload handed to the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignInRequest {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub role: UserRole,
}

impl SignInRequest {
    /// Check the form and produce the session user it describes.
    ///
    /// Blank image means "no avatar". A non-blank image must be an absolute
    /// http(s) URL or a site-relative path.
    pub fn validate(&self) -> Result<SessionUser, AppError> {
        let mut field_errors = HashMap::new();

        let name = self.name.trim();
        if name.is_empty() {
            field_errors.insert("name".to_string(), "Name is required".to_string());
        }

        let image = self.image.trim();
        let image_ok = image.is_empty()
            || image.starts_with('/')
            || image.starts_with("https://")
            || image.starts_with("http://");
        if !image_ok {
            field_errors.insert(
                "image".to_string(),
                "Avatar must be a URL or a path starting with /".to_string(),
            );
        }

        if !field_errors.is_empty() {
            return Err(AppError::validation("Validation failed", field_errors));
        }

        Ok(SessionUser {
            name: Some(name.to_string()),
            image: (!image.is_empty()).then(|| image.to_string()),
            role: self.role,
        })
    }
}
