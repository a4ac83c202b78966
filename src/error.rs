use std::io;

use thiserror::Error;

/// Every condition that ends an invocation with exit status 1.
///
/// The `Display` text is the diagnostic written to stderr. Recoverable
/// conditions, like a Spotify page that cannot be fetched, never become an
/// `AppError`; they surface as `None` and the caller decides.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{binary} not found. Make sure it's installed and in your PATH.")]
    ToolNotFound { binary: String },

    #[error("Failed to start {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("yt-dlp command failed or returned empty output.\nReturn Code: {code}\n{details}")]
    PlaylistFailed { code: i32, details: String },

    #[error("Failed to parse a line of yt-dlp JSON output: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    #[error("Failed to get media title.\nDetails: {0}")]
    TitleFailed(String),

    #[error("yt-dlp did not return a filename.")]
    EmptyFilename,

    #[error("Could not fetch title from Spotify URL.")]
    SpotifyTitleUnavailable,

    #[error("Download process failed for command: {command}\nDetails: {details}")]
    DownloadFailed { command: String, details: String },

    #[error("Failed to prepare output directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize playlist entries: {0}")]
    Serialize(#[source] serde_json::Error),
}
