use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::{
    error::Result,
    types::LabeledComment,
    video_id::{VideoId, is_valid_id},
};

const EXPORT_EXTENSION: &str = "csv";
/// Subdirectory created under a user-chosen output directory
pub const EXPORT_SUBDIR: &str = "sentitube-exports";

/// Default export directory, owned by this tool
pub fn default_export_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("sentitube")
        .join("exports")
}

/// Export directory inside a user-chosen base directory.
///
/// Retention deletes files, so exports never share a directory with files
/// this tool did not write.
pub fn owned_export_dir(base: &Path) -> PathBuf {
    base.join(EXPORT_SUBDIR)
}

/// Get the export path for a video, one file per video id
pub fn export_path(dir: &Path, video_id: &VideoId) -> PathBuf {
    dir.join(format!("{}.{}", video_id, EXPORT_EXTENSION))
}

/// Serialize labeled comments as CSV
pub fn to_csv(comments: &[LabeledComment]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["published_at", "author", "like_count", "score", "label", "text"])?;

    for c in comments {
        writer.write_record([
            c.comment.published_at.to_rfc3339(),
            c.comment.author.clone().unwrap_or_default(),
            c.comment.like_count.to_string(),
            format!("{:.4}", c.sentiment.score),
            c.sentiment.label.as_str().to_string(),
            c.comment.text.clone(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()).into())
}

/// Write the export for a video, replacing any earlier export of it
pub async fn write_export(
    dir: &Path,
    video_id: &VideoId,
    comments: &[LabeledComment],
) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let path = export_path(dir, video_id);
    let bytes = to_csv(comments)?;
    fs::write(&path, &bytes).await?;
    info!(path = %path.display(), rows = comments.len(), "export written");
    Ok(path)
}

/// Delete exports of other videos from `dir`.
///
/// Only regular files named `<video id>.csv` are considered; everything else
/// in the directory is left alone. Returns the removed paths.
pub async fn retain_only(dir: &Path, video_id: &VideoId) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(removed),
        Err(e) => return Err(e.into()),
    };

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        if !is_stale_export(&path, video_id) {
            continue;
        }
        fs::remove_file(&path).await?;
        debug!(path = %path.display(), "removed stale export");
        removed.push(path);
    }

    Ok(removed)
}

fn is_stale_export(path: &Path, current: &VideoId) -> bool {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION));
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    is_csv && is_valid_id(stem) && stem != current.as_str()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::{Comment, Sentiment, SentimentLabel};

    fn id(raw: &str) -> VideoId {
        VideoId::parse(raw).unwrap()
    }

    fn rows() -> Vec<LabeledComment> {
        vec![
            LabeledComment {
                comment: Comment {
                    text: "Great song, \"classic\"\nsecond line".into(),
                    published_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap(),
                    author: Some("@fan".into()),
                    like_count: 7,
                },
                sentiment: Sentiment {
                    label: SentimentLabel::Positive,
                    score: 0.62491,
                },
            },
            LabeledComment {
                comment: Comment {
                    text: "ok".into(),
                    published_at: Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
                    author: None,
                    like_count: 0,
                },
                sentiment: Sentiment {
                    label: SentimentLabel::Neutral,
                    score: 0.0,
                },
            },
        ]
    }

    #[test]
    fn export_file_is_named_after_video() {
        let path = export_path(Path::new("/data/exports"), &id("dQw4w9WgXcQ"));
        assert_eq!(path, PathBuf::from("/data/exports/dQw4w9WgXcQ.csv"));
    }

    #[test]
    fn csv_has_header_and_quoted_rows() {
        let bytes = to_csv(&rows()).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["published_at", "author", "like_count", "score", "label", "text"]
        );

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "2024-03-01T10:15:00+00:00");
        assert_eq!(&records[0][3], "0.6249");
        assert_eq!(&records[0][4], "positive");
        assert_eq!(&records[0][5], "Great song, \"classic\"\nsecond line");
        assert_eq!(&records[1][1], "");
    }

    #[test]
    fn empty_export_has_only_header() {
        let bytes = to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "published_at,author,like_count,score,label,text\n");
    }

    #[tokio::test]
    async fn rewriting_same_video_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let video = id("dQw4w9WgXcQ");

        let first = write_export(dir.path(), &video, &rows()).await.unwrap();
        let second = write_export(dir.path(), &video, &rows()[..1]).await.unwrap();

        assert_eq!(first, second);
        let content = std::fs::read_to_string(&second).unwrap();
        assert_eq!(content.matches("positive").count(), 1);
        assert!(!content.contains("neutral"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn retain_only_removes_other_exports_only() {
        let dir = tempfile::tempdir().unwrap();
        let current = id("dQw4w9WgXcQ");
        let root = dir.path();

        std::fs::write(root.join("dQw4w9WgXcQ.csv"), "current").unwrap();
        std::fs::write(root.join("9bZkp7q19f0.csv"), "old").unwrap();
        std::fs::write(root.join("notes.csv"), "keep").unwrap();
        std::fs::write(root.join("jNQXAC9IVRw.json"), "keep").unwrap();
        std::fs::create_dir(root.join("kJQP7kiw5Fk.csv")).unwrap();

        let removed = retain_only(root, &current).await.unwrap();

        assert_eq!(removed, vec![root.join("9bZkp7q19f0.csv")]);
        assert!(root.join("dQw4w9WgXcQ.csv").exists());
        assert!(root.join("notes.csv").exists());
        assert!(root.join("jNQXAC9IVRw.json").exists());
        assert!(root.join("kJQP7kiw5Fk.csv").is_dir());
    }

    #[tokio::test]
    async fn retain_only_tolerates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-created");

        let removed = retain_only(&missing, &id("dQw4w9WgXcQ")).await.unwrap();
        assert!(removed.is_empty());
    }

    #[tokio::test]
    async fn user_directory_files_survive_retention() {
        let base = tempfile::tempdir().unwrap();
        let unrelated = base.path().join("9bZkp7q19f0.csv");
        std::fs::write(&unrelated, "user data").unwrap();

        let dir = owned_export_dir(base.path());
        let path = write_export(&dir, &id("dQw4w9WgXcQ"), &rows()).await.unwrap();
        let removed = retain_only(&dir, &id("dQw4w9WgXcQ")).await.unwrap();

        assert_eq!(path, base.path().join(EXPORT_SUBDIR).join("dQw4w9WgXcQ.csv"));
        assert!(removed.is_empty());
        assert_eq!(std::fs::read_to_string(&unrelated).unwrap(), "user data");
    }
}
