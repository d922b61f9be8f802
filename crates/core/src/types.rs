use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::video_id::VideoId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: Option<String>,
    pub like_count: u64,
}

/// Comments of one video, in the order the API returned them
#[derive(Debug, Clone, Serialize)]
pub struct CommentDataset {
    pub video_id: VideoId,
    pub comments: Vec<Comment>,
    /// Pagination stopped at the configured cap while more pages remained
    pub truncated: bool,
}

impl CommentDataset {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Polarity in [-1.0, 1.0]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledComment {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(flatten)]
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub num_positive: usize,
    pub num_negative: usize,
    pub num_neutral: usize,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.num_positive + self.num_negative + self.num_neutral
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.num_positive,
            SentimentLabel::Negative => self.num_negative,
            SentimentLabel::Neutral => self.num_neutral,
        }
    }
}

/// One pie slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub label: SentimentLabel,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub slices: [DistributionSlice; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub bucket: NaiveDate,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl TrendPoint {
    pub fn empty(bucket: NaiveDate) -> Self {
        Self {
            bucket,
            positive: 0,
            negative: 0,
            neutral: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelInfo {
    pub id: String,
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub subscriber_count: Option<u64>,
    pub video_count: Option<u64>,
    pub description: String,
    pub logo_url: Option<String>,
}

/// Everything a presentation layer needs from one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub video_id: VideoId,
    pub video: VideoInfo,
    pub channel: ChannelInfo,
    pub comment_count: usize,
    pub truncated: bool,
    pub summary: SentimentSummary,
    pub distribution: Distribution,
    pub trend: Vec<TrendPoint>,
    pub export_path: std::path::PathBuf,
}
