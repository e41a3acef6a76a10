//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::generation::ModelId;

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(ModelId::default().to_string()),
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            clipboard: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            base_url: other.base_url.or(self.base_url),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get the model as a parsed ModelId, or the default if not set/blank
    pub fn model_or_default(&self) -> ModelId {
        self.model
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the API base URL without a trailing slash
    pub fn base_url_or_default(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, Some("gpt-4o-mini".to_string()));
        assert_eq!(config.base_url, Some(DEFAULT_BASE_URL.to_string()));
        assert_eq!(config.clipboard, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.base_url.is_none());
        assert!(config.clipboard.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            model: Some("gpt-4o".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            model: None, // Should not override
            clipboard: Some(true),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.model, Some("gpt-4o".to_string()));
        assert_eq!(merged.clipboard, Some(true));
    }

    #[test]
    fn merge_with_empty_preserves_base() {
        let base = AppConfig::defaults();
        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged, base);
    }

    #[test]
    fn model_or_default_parses() {
        let config = AppConfig {
            model: Some("gpt-4o".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model_or_default().as_str(), "gpt-4o");
    }

    #[test]
    fn model_or_default_uses_default_on_blank() {
        let config = AppConfig {
            model: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model_or_default().as_str(), "gpt-4o-mini");
        assert_eq!(AppConfig::empty().model_or_default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = AppConfig {
            base_url: Some("http://localhost:8080/v1/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url_or_default(), "http://localhost:8080/v1");
    }

    #[test]
    fn base_url_defaults() {
        assert_eq!(AppConfig::empty().base_url_or_default(), DEFAULT_BASE_URL);
    }

    #[test]
    fn clipboard_defaults_to_false() {
        assert!(!AppConfig::empty().clipboard_or_default());
    }
}
