use crate::error::{AssistantError, Result};

/// Environment variable holding the Gemini API key. Required.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Optional override for the generation model.
pub const MODEL_ENV: &str = "STUDY_ASSISTANT_MODEL";
/// Optional override for the service base URL.
pub const BASE_URL_ENV: &str = "STUDY_ASSISTANT_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Process-wide settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AppConfig {
    /// Reads the configuration from the environment. A missing or blank
    /// API key is fatal: the caller is expected to stop, not degrade.
    pub fn from_env() -> Result<AppConfig> {
        AppConfig::build(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    fn build(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<AppConfig> {
        let api_key = match non_blank(api_key) {
            Some(key) => key,
            None => {
                return Err(AssistantError::Configuration(format!(
                    "{API_KEY_ENV} is missing or empty; set it before launching"
                )))
            }
        };

        let model = non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(AppConfig {
            api_key,
            model,
            base_url,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_fatal() {
        let err = AppConfig::build(None, None, None).unwrap_err();
        match err {
            AssistantError::Configuration(message) => {
                assert!(message.contains("GEMINI_API_KEY"));
            }
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn blank_key_is_fatal() {
        let err = AppConfig::build(Some("   ".to_string()), None, None).unwrap_err();
        assert!(matches!(err, AssistantError::Configuration(_)));
    }

    #[test]
    fn defaults_apply_when_overrides_are_absent() {
        let config = AppConfig::build(Some("key".to_string()), None, None).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn overrides_win_and_trailing_slashes_are_dropped() {
        let config = AppConfig::build(
            Some("key".to_string()),
            Some("gemini-2.5-pro".to_string()),
            Some("https://example.test/".to_string()),
        )
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "https://example.test");
    }
}
