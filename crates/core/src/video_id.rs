use std::{fmt, str::FromStr};

use serde::Serialize;
use url::Url;

use crate::error::{Result, SentitubeError};

const ID_LEN: usize = 11;

/// Validated YouTube video identifier (11 chars of `[A-Za-z0-9_-]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video id from a watch, short-link, embed, shorts or live URL,
    /// or accept a bare id as-is.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if is_valid_id(trimmed) {
            return Ok(Self(trimmed.to_string()));
        }

        match extract_candidate(trimmed) {
            Some(candidate) if is_valid_id(&candidate) => Ok(Self(candidate)),
            _ => Err(SentitubeError::InvalidUrl {
                input: input.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

/// True for strings that look like a video id
pub fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn extract_candidate(input: &str) -> Option<String> {
    let url = if input.contains("://") {
        Url::parse(input).ok()?
    } else {
        Url::parse(&format!("https://{}", input)).ok()?
    };

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(host.as_str());
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" | "m.youtube.com" | "music.youtube.com" | "youtube-nocookie.com" => {
            match segments.next()? {
                "watch" => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                "embed" | "v" | "shorts" | "live" => segments.next().map(str::to_string),
                _ => None,
            }
        }
        _ => None,
    }
}

impl FromStr for VideoId {
    type Err = SentitubeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn watch_url_yields_id() {
        let id = VideoId::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), ID);
    }

    #[test]
    fn every_supported_shape_matches_bare_id() {
        let bare = VideoId::parse(ID).unwrap();
        let shapes = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ&feature=share",
            "https://www.youtube.com/watch?feature=shared&v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLrAXtmRdnEQy&index=2",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=30",
            "youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ?si=abc",
            "  https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=1  ",
        ];

        for shape in shapes {
            assert_eq!(VideoId::parse(shape).unwrap(), bare, "shape: {}", shape);
        }
    }

    #[test]
    fn malformed_inputs_are_invalid_url() {
        let inputs = [
            "",
            "   ",
            "not a url",
            "https://vimeo.com/123456789",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQextra",
            "https://www.youtube.com/watch",
            "https://www.youtube.com/playlist?list=PLrAXtmRdnEQy",
            "https://youtu.be/",
            "https://youtu.be/dQw4w9WgX!Q",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/",
            "https://notyoutube.com/watch?v=dQw4w9WgXcQ",
            "dQw4w9WgXc",
        ];

        for input in inputs {
            let err = VideoId::parse(input).unwrap_err();
            assert!(
                matches!(err, SentitubeError::InvalidUrl { .. }),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn from_str_and_display() {
        let id: VideoId = "https://youtu.be/dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(id.to_string(), ID);
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
