use std::{fmt, path::PathBuf};

use serde::Serialize;
use serde_json::Value;

/// One playlist member as reported back to the caller.
///
/// Only built when the source record carried both a non-empty `id` and a
/// non-empty `title`. `thumbnail` is passed through untouched and serializes
/// as `null` when the record had none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistEntry {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    Audio,
    Video,
}

impl FormatType {
    /// `audio` selects audio extraction, any other value means video.
    pub fn from_arg(value: &str) -> Self {
        if value == "audio" {
            FormatType::Audio
        } else {
            FormatType::Video
        }
    }

    /// Subdirectory of the output root the download lands in.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            FormatType::Audio => "Audio",
            FormatType::Video => "Video",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatType::Audio => write!(f, "audio"),
            FormatType::Video => write!(f, "video"),
        }
    }
}

/// A media URL classified at the point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUrl {
    Spotify(String),
    Generic(String),
}

impl MediaUrl {
    pub fn classify(url: &str, spotify_host: &str) -> Self {
        if url.contains(spotify_host) {
            MediaUrl::Spotify(url.to_string())
        } else {
            MediaUrl::Generic(url.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaUrl::Spotify(url) | MediaUrl::Generic(url) => url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub quality_selector: String,
    pub format_type: FormatType,
    pub output_root: PathBuf,
}

impl DownloadRequest {
    /// `<output_root>/Audio` or `<output_root>/Video`.
    pub fn destination(&self) -> PathBuf {
        self.output_root.join(self.format_type.subdirectory())
    }
}

/// Fully buffered outcome of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// `-1` when the process was terminated without an exit code.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
