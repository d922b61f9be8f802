//! Sentitube Core Library
//!
//! Fetches the comments of a YouTube video, scores their sentiment and
//! aggregates the labels into counts and a per-day trend.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod format;
mod lexicon;
pub mod pipeline;
pub mod sentiment;
pub mod types;
pub mod video_id;
pub mod youtube;

// Re-export commonly used items at crate root
pub use aggregate::{TrendFill, distribution, summarize, trend};
pub use config::{API_BASE_ENV, API_KEY_ENV, ApiConfig, validate_api_key};
pub use error::{Result, SentitubeError};
pub use export::{
    EXPORT_SUBDIR, default_export_dir, export_path, owned_export_dir, retain_only, write_export,
};
pub use fetcher::fetch_comments;
pub use format::{format_count, format_report_readable};
pub use pipeline::{Analyzer, AnalyzerConfig, Stage};
pub use sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentClassifier, Thresholds};
pub use types::{
    AnalysisReport, ChannelInfo, Comment, CommentDataset, Distribution, DistributionSlice,
    LabeledComment, Sentiment, SentimentLabel, SentimentSummary, TrendPoint, VideoInfo,
};
pub use video_id::VideoId;
pub use youtube::{CommentPage, YoutubeApi, YoutubeClient};
