//! Typed access to the three YouTube Data API v3 endpoints the analyzer uses:
//! `commentThreads`, `videos` and `channels`.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    error::{Result, SentitubeError},
    types::{ChannelInfo, Comment, VideoInfo},
    video_id::VideoId,
};

/// One page of top-level comments
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub next_page_token: Option<String>,
}

/// Source of video, channel and comment data
pub trait YoutubeApi {
    async fn comment_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> Result<CommentPage>;

    async fn video(&self, video_id: &VideoId) -> Result<VideoInfo>;

    async fn channel(&self, channel_id: &str) -> Result<ChannelInfo>;
}

pub struct YoutubeClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl YoutubeClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        resource: &'static str,
        id: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), endpoint);
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(endpoint, id, attempt, "requesting");

            let sent = self
                .http
                .get(&url)
                .query(query)
                .query(&[("key", self.config.api_key.as_str())])
                .send()
                .await;

            match sent {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.json::<T>().await?);
                    }

                    let body = response.text().await.unwrap_or_default();
                    if status.is_server_error() && attempt < max_attempts {
                        warn!(endpoint, %status, attempt, "server error, retrying");
                        self.backoff(attempt).await;
                        continue;
                    }
                    return Err(classify_api_error(status, &body, resource, id));
                }
                Err(err) if attempt < max_attempts && is_transient(&err) => {
                    warn!(endpoint, error = %err, attempt, "request failed, retrying");
                    self.backoff(attempt).await;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn backoff(&self, attempt: u32) {
        tokio::time::sleep(self.config.retry_backoff * attempt).await;
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

impl YoutubeApi for YoutubeClient {
    async fn comment_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> Result<CommentPage> {
        let page_size = self.config.page_size.clamp(1, 100).to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id.as_str()),
            ("maxResults", page_size.as_str()),
            ("order", "time"),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response: CommentThreadListResponse = self
            .get("commentThreads", &query, "video", video_id.as_str())
            .await?;
        Ok(response.into())
    }

    async fn video(&self, video_id: &VideoId) -> Result<VideoInfo> {
        let query = [("part", "snippet,statistics"), ("id", video_id.as_str())];
        let response: ListResponse<VideoResource> =
            self.get("videos", &query, "video", video_id.as_str()).await?;

        response
            .items
            .into_iter()
            .next()
            .map(VideoInfo::from)
            .ok_or_else(|| SentitubeError::NotFound {
                resource: "video",
                id: video_id.to_string(),
            })
    }

    async fn channel(&self, channel_id: &str) -> Result<ChannelInfo> {
        let query = [("part", "snippet,statistics"), ("id", channel_id)];
        let response: ListResponse<ChannelResource> =
            self.get("channels", &query, "channel", channel_id).await?;

        response
            .items
            .into_iter()
            .next()
            .map(ChannelInfo::from)
            .ok_or_else(|| SentitubeError::NotFound {
                resource: "channel",
                id: channel_id.to_string(),
            })
    }
}

/// Map a non-success API response onto an error kind
pub fn classify_api_error(
    status: StatusCode,
    body: &str,
    resource: &'static str,
    id: &str,
) -> SentitubeError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_default();
    let reason = detail
        .errors
        .first()
        .map(|e| e.reason.as_str())
        .unwrap_or_default();
    let message = if detail.message.is_empty() {
        reason.to_string()
    } else {
        detail.message.clone()
    };

    match reason {
        "quotaExceeded" | "rateLimitExceeded" | "userRateLimitExceeded" | "dailyLimitExceeded" => {
            SentitubeError::RateLimited { reason: message }
        }
        "commentsDisabled" => SentitubeError::CommentsDisabled {
            video_id: id.to_string(),
        },
        "videoNotFound" | "channelNotFound" | "notFound" => SentitubeError::NotFound {
            resource,
            id: id.to_string(),
        },
        _ if status == StatusCode::TOO_MANY_REQUESTS => {
            SentitubeError::RateLimited { reason: message }
        }
        _ if status == StatusCode::NOT_FOUND => SentitubeError::NotFound {
            resource,
            id: id.to_string(),
        },
        _ => SentitubeError::FetchFailed {
            status: status.as_u16(),
            reason: if message.is_empty() {
                status.to_string()
            } else {
                message
            },
        },
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: ApiErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorItem {
    #[serde(default)]
    reason: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    next_page_token: Option<String>,
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_display: String,
    text_original: Option<String>,
    author_display_name: Option<String>,
    #[serde(default)]
    like_count: u64,
    published_at: DateTime<Utc>,
}

impl From<CommentSnippet> for Comment {
    fn from(snippet: CommentSnippet) -> Self {
        Self {
            text: snippet.text_original.unwrap_or(snippet.text_display),
            published_at: snippet.published_at,
            author: snippet.author_display_name.filter(|a| !a.is_empty()),
            like_count: snippet.like_count,
        }
    }
}

impl From<CommentThreadListResponse> for CommentPage {
    fn from(response: CommentThreadListResponse) -> Self {
        Self {
            comments: response
                .items
                .into_iter()
                .map(|thread| thread.snippet.top_level_comment.snippet.into())
                .collect(),
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct VideoResource {
    id: String,
    snippet: VideoSnippet,
    #[serde(default)]
    statistics: VideoStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    channel_id: String,
    #[serde(default)]
    title: String,
}

// Counts arrive as decimal strings and are omitted when hidden
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

impl From<VideoResource> for VideoInfo {
    fn from(video: VideoResource) -> Self {
        Self {
            id: video.id,
            title: video.snippet.title,
            channel_id: video.snippet.channel_id,
            view_count: parse_count(video.statistics.view_count),
            like_count: parse_count(video.statistics.like_count),
            comment_count: parse_count(video.statistics.comment_count),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChannelResource {
    id: String,
    snippet: ChannelSnippet,
    #[serde(default)]
    statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    subscriber_count: Option<String>,
    video_count: Option<String>,
    #[serde(default)]
    hidden_subscriber_count: bool,
}

impl From<ChannelResource> for ChannelInfo {
    fn from(channel: ChannelResource) -> Self {
        let thumbnails = channel.snippet.thumbnails;
        let logo_url = thumbnails
            .high
            .or(thumbnails.medium)
            .or(thumbnails.default)
            .map(|t| t.url);
        let subscriber_count = if channel.statistics.hidden_subscriber_count {
            None
        } else {
            parse_count(channel.statistics.subscriber_count)
        };

        Self {
            id: channel.id,
            title: channel.snippet.title,
            created_at: channel.snippet.published_at,
            subscriber_count,
            video_count: parse_count(channel.statistics.video_count),
            description: channel.snippet.description,
            logo_url,
        }
    }
}

fn parse_count(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}
