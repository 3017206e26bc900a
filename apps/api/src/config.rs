use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_LLM_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
const DEFAULT_LLM_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only malformed values are fatal; a missing LLM token just disables AI features.
#[derive(Debug, Clone)]
pub struct Config {
    pub huggingface_api_token: Option<String>,
    pub llm_model: String,
    pub llm_api_url: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            huggingface_api_token: optional_env("HUGGINGFACE_API_TOKEN"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_api_url: optional_env("LLM_API_URL")
                .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 30)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 5001)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn llm_configured(&self) -> bool {
        self.huggingface_api_token.is_some()
    }

    /// Timeout for a single HTTP attempt against the inference endpoint.
    pub fn llm_request_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Upper bound on one generative call including the client's retries.
    /// Two full attempts plus backoff; a slower call is abandoned and the step degrades.
    pub fn llm_call_budget(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs * 2 + 5)
    }
}

/// Treats an empty or whitespace-only value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so parallel tests never race.

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("RESUME_API_TEST_UNSET_PORT", 5001).unwrap();
        assert_eq!(value, 5001);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_BAD_PORT", "not-a-port");
        let err = parse_env::<u16>("RESUME_API_TEST_BAD_PORT", 5001).unwrap_err();
        assert!(err.to_string().contains("RESUME_API_TEST_BAD_PORT"));
    }

    #[test]
    fn test_llm_call_budget_covers_a_retry() {
        let config = Config {
            huggingface_api_token: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_timeout_secs: 30,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 5001,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.llm_request_timeout(), Duration::from_secs(30));
        assert_eq!(config.llm_call_budget(), Duration::from_secs(65));
        assert!(!config.llm_configured());
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("RESUME_API_TEST_BLANK_TOKEN", "   ");
        assert_eq!(optional_env("RESUME_API_TEST_BLANK_TOKEN"), None);
    }
}
