use serde::{Deserialize, Serialize};

use crate::AppError;

/// Branding shown in the sidebar header and page titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
        }
    }
}

/// Session presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Image used when the signed-in user has no avatar.
    #[serde(default = "default_avatar")]
    pub default_avatar: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_avatar: default_avatar(),
        }
    }
}

/// Stay search copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_headline")]
    pub headline: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            headline: default_headline(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults, so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        toml::from_str(source).map_err(|e| AppError::bad_request(format!("invalid config.toml: {e}")))
    }
}

fn default_brand_name() -> String {
    "Servy".to_string()
}

fn default_avatar() -> String {
    "/default-avatar.png".to_string()
}

fn default_headline() -> String {
    "Find your stay in Bali".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.branding.name, "Servy");
        assert_eq!(config.session.default_avatar, "/default-avatar.png");
        assert_eq!(config.search.headline, "Find your stay in Bali");
    }

    #[test]
    fn partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [branding]
            name = "Servy Staging"
            "#,
        )
        .unwrap();
        assert_eq!(config.branding.name, "Servy Staging");
        assert_eq!(config.session, SessionConfig::default());
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [branding]
            name = "Servy"

            [session]
            default_avatar = "/img/anon.png"

            [search]
            headline = "Find your stay in Ubud"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.default_avatar, "/img/anon.png");
        assert_eq!(config.search.headline, "Find your stay in Ubud");
    }

    #[test]
    fn malformed_toml_is_bad_request() {
        let err = AppConfig::from_toml_str("[branding\nname = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.starts_with("invalid config.toml"));
    }

    #[test]
    fn workspace_config_parses() {
        let source = include_str!("../../../config.toml");
        assert!(AppConfig::from_toml_str(source).is_ok());
    }
}
