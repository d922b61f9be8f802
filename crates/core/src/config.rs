use std::time::Duration;

use crate::error::{Result, SentitubeError};

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const API_BASE_ENV: &str = "YOUTUBE_API_BASE";
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Connection settings for the YouTube Data API
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_base: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total tries per request, first one included
    pub max_attempts: u32,
    pub retry_backoff: Duration,
    /// `maxResults` for comment listing, the API caps it at 100
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            retry_backoff: Duration::from_millis(500),
            page_size: 100,
        }
    }

    /// Build from `YOUTUBE_API_KEY` and optional `YOUTUBE_API_BASE`
    pub fn from_env() -> Result<Self> {
        let api_key = validate_api_key()?;
        let mut config = Self::new(api_key);
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                config.api_base = base.trim().trim_end_matches('/').to_string();
            }
        }
        Ok(config)
    }
}

/// Validate that the API key is set
pub fn validate_api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(SentitubeError::MissingApiKey {
            env_var: API_KEY_ENV.to_string(),
        }),
    }
}
