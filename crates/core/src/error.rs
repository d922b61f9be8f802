use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentitubeError {
    #[error("Invalid YouTube link: {input}")]
    InvalidUrl { input: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("YouTube API quota or rate limit exceeded: {reason}")]
    RateLimited { reason: String },

    #[error("Comments are disabled for video {video_id}")]
    CommentsDisabled { video_id: String },

    #[error("YouTube API request failed with status {status}: {reason}")]
    FetchFailed { status: u16, reason: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

impl SentitubeError {
    /// Network or API failures, including quota exhaustion.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            SentitubeError::RateLimited { .. }
                | SentitubeError::CommentsDisabled { .. }
                | SentitubeError::FetchFailed { .. }
                | SentitubeError::Http(_)
        )
    }

    /// Short message suitable for showing to the person who pasted the link.
    pub fn user_message(&self) -> String {
        match self {
            SentitubeError::InvalidUrl { .. } => "Invalid YouTube link provided.".to_string(),
            SentitubeError::NotFound { resource, .. } => {
                format!("The {} could not be found. Check the link.", resource)
            }
            SentitubeError::RateLimited { .. } => {
                "YouTube API quota exhausted. Try again later.".to_string()
            }
            SentitubeError::CommentsDisabled { .. } => {
                "Comments are turned off for this video.".to_string()
            }
            SentitubeError::MissingApiKey { env_var } => {
                format!("Set {} to a YouTube Data API key.", env_var)
            }
            other => format!("Could not fetch data from YouTube: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SentitubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_is_a_fetch_failure() {
        let err = SentitubeError::RateLimited {
            reason: "quotaExceeded".into(),
        };
        assert!(err.is_fetch_failure());
        assert!(err.user_message().contains("quota"));
    }

    #[test]
    fn invalid_url_is_not_a_fetch_failure() {
        let err = SentitubeError::InvalidUrl {
            input: "nope".into(),
        };
        assert!(!err.is_fetch_failure());
        assert_eq!(err.user_message(), "Invalid YouTube link provided.");
    }
}
