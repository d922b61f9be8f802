use std::path::PathBuf;

use tracing::info;

use crate::{
    aggregate::{TrendFill, distribution, summarize, trend},
    error::Result,
    export::{default_export_dir, retain_only, write_export},
    fetcher::fetch_comments,
    sentiment::SentimentClassifier,
    types::{AnalysisReport, ChannelInfo, SentimentSummary, VideoInfo},
    video_id::VideoId,
    youtube::YoutubeApi,
};

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory this tool owns for CSV exports
    pub output_dir: PathBuf,
    pub max_comments: Option<usize>,
    pub trend_fill: TrendFill,
    /// Delete exports of other videos after writing the current one
    pub retain_only_current: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: default_export_dir(),
            max_comments: None,
            trend_fill: TrendFill::Sparse,
            retain_only_current: true,
        }
    }
}

/// Stage notifications for progress display
#[derive(Debug, Clone)]
pub enum Stage<'a> {
    Resolved(&'a VideoId),
    VideoFetched(&'a VideoInfo),
    ChannelFetched(&'a ChannelInfo),
    CommentsFetched { count: usize, truncated: bool },
    Classified(&'a SentimentSummary),
    Exported(&'a PathBuf),
}

pub struct Analyzer<A> {
    api: A,
    classifier: SentimentClassifier,
    config: AnalyzerConfig,
}

impl<A: YoutubeApi> Analyzer<A> {
    pub fn new(api: A, config: AnalyzerConfig) -> Self {
        Self {
            api,
            classifier: SentimentClassifier::new(),
            config,
        }
    }

    pub fn with_classifier(mut self, classifier: SentimentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub async fn run(&self, url: &str) -> Result<AnalysisReport> {
        self.run_with_progress(url, |_| {}).await
    }

    /// One analysis run, from URL to report. Fails fast on an invalid link
    /// and on any fetch error; nothing is exported in that case.
    pub async fn run_with_progress<F>(&self, url: &str, mut progress: F) -> Result<AnalysisReport>
    where
        F: FnMut(Stage<'_>),
    {
        let video_id = VideoId::parse(url)?;
        progress(Stage::Resolved(&video_id));

        let video = self.api.video(&video_id).await?;
        progress(Stage::VideoFetched(&video));

        let channel = self.api.channel(&video.channel_id).await?;
        progress(Stage::ChannelFetched(&channel));

        let dataset = fetch_comments(&self.api, &video_id, self.config.max_comments).await?;
        progress(Stage::CommentsFetched {
            count: dataset.len(),
            truncated: dataset.truncated,
        });

        let truncated = dataset.truncated;
        let labeled = self.classifier.label_comments(dataset.comments);
        let summary = summarize(&labeled);
        progress(Stage::Classified(&summary));

        let distribution = distribution(&summary);
        let trend = trend(&labeled, self.config.trend_fill);

        let export_path = write_export(&self.config.output_dir, &video_id, &labeled).await?;
        if self.config.retain_only_current {
            retain_only(&self.config.output_dir, &video_id).await?;
        }
        progress(Stage::Exported(&export_path));

        info!(
            video_id = %video_id,
            comments = labeled.len(),
            positive = summary.num_positive,
            negative = summary.num_negative,
            neutral = summary.num_neutral,
            "analysis finished"
        );

        Ok(AnalysisReport {
            video_id,
            video,
            channel,
            comment_count: labeled.len(),
            truncated,
            summary,
            distribution,
            trend,
            export_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::SentitubeError,
        fetcher::tests::{FakeApi, page},
        types::SentimentLabel,
    };

    fn video() -> VideoInfo {
        VideoInfo {
            id: "dQw4w9WgXcQ".into(),
            title: "Never Gonna Give You Up".into(),
            channel_id: "UCuAXFkgsw1L7xaCfnd5JJOw".into(),
            view_count: Some(1_500_000_000),
            like_count: Some(17_000_000),
            comment_count: Some(5),
        }
    }

    fn channel() -> ChannelInfo {
        ChannelInfo {
            id: "UCuAXFkgsw1L7xaCfnd5JJOw".into(),
            title: "Rick Astley".into(),
            created_at: None,
            subscriber_count: Some(4_200_000),
            video_count: Some(300),
            description: "Official channel".into(),
            logo_url: None,
        }
    }

    fn api() -> FakeApi {
        let mut api = FakeApi::with_pages(vec![
            (None, page(&["I love this!!", "worst song ever"], Some("p2"))),
            (Some("p2"), page(&["first", "so good", "amazing"], None)),
        ]);
        api.video = Some(video());
        api.channel = Some(channel());
        api
    }

    fn config(dir: &std::path::Path) -> AnalyzerConfig {
        AnalyzerConfig {
            output_dir: dir.to_path_buf(),
            ..AnalyzerConfig::default()
        }
    }

    #[tokio::test]
    async fn run_produces_consistent_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9bZkp7q19f0.csv"), "old").unwrap();
        let analyzer = Analyzer::new(api(), config(dir.path()));

        let mut stages = Vec::new();
        let report = analyzer
            .run_with_progress("https://youtu.be/dQw4w9WgXcQ", |stage| {
                stages.push(format!("{:?}", stage).split(['(', ' ']).next().unwrap().to_string())
            })
            .await
            .unwrap();

        assert_eq!(report.video_id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(report.channel.title, "Rick Astley");
        assert_eq!(report.comment_count, 5);
        assert_eq!(report.summary.total(), 5);
        assert_eq!(report.summary.num_positive, 3);
        assert_eq!(report.summary.num_negative, 1);
        assert_eq!(report.summary.num_neutral, 1);
        assert_eq!(report.distribution.slices[0].label, SentimentLabel::Positive);
        assert_eq!(report.trend.iter().map(|p| p.total()).sum::<usize>(), 5);
        assert_eq!(report.export_path, dir.path().join("dQw4w9WgXcQ.csv"));
        assert!(report.export_path.exists());
        assert!(!dir.path().join("9bZkp7q19f0.csv").exists());
        assert_eq!(
            stages,
            vec![
                "Resolved",
                "VideoFetched",
                "ChannelFetched",
                "CommentsFetched",
                "Classified",
                "Exported"
            ]
        );
    }

    #[tokio::test]
    async fn invalid_url_fails_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let api = api();
        let analyzer = Analyzer::new(api, config(dir.path()));

        let err = analyzer.run("https://vimeo.com/123").await.unwrap_err();

        assert!(matches!(err, SentitubeError::InvalidUrl { .. }));
        assert!(analyzer.api.requested.borrow().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_writes_no_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api();
        api.fail_on = Some(Some("p2".to_string()));
        let analyzer = Analyzer::new(api, config(dir.path()));

        let err = analyzer.run("dQw4w9WgXcQ").await.unwrap_err();

        assert!(err.is_fetch_failure());
        assert!(!dir.path().join("dQw4w9WgXcQ.csv").exists());
    }

    #[tokio::test]
    async fn missing_video_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api();
        api.video = None;
        let analyzer = Analyzer::new(api, config(dir.path()));

        let err = analyzer.run("dQw4w9WgXcQ").await.unwrap_err();

        assert!(matches!(err, SentitubeError::NotFound { resource: "video", .. }));
    }

    #[tokio::test]
    async fn keep_exports_skips_retention() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9bZkp7q19f0.csv"), "old").unwrap();
        let analyzer = Analyzer::new(
            api(),
            AnalyzerConfig {
                retain_only_current: false,
                ..config(dir.path())
            },
        );

        analyzer.run("dQw4w9WgXcQ").await.unwrap();

        assert!(dir.path().join("9bZkp7q19f0.csv").exists());
    }
}
