//! Runtime configuration for the yt-dlp adapter.
//!
//! The adapter keeps no configuration files and reads no environment
//! variables. Everything that could vary lives in [`Config`], built from
//! defaults in `main` and passed by reference into every action, which is
//! also how the tests swap in their own binary names and paths.

/// Name of the extraction tool, resolved through the search path.
pub const DEFAULT_BINARY: &str = "yt-dlp";

/// Browser-like agent; Spotify rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub const SPOTIFY_HOST: &str = "open.spotify.com";

/// yt-dlp pseudo-URL returning the first YouTube search hit.
pub const SEARCH_PREFIX: &str = "ytsearch1:";

pub const FILENAME_TEMPLATE: &str = "%(title)s.%(ext)s";

#[derive(Debug, Clone)]
pub struct Config {
    /// Program spawned for every tool invocation.
    pub binary: String,
    pub user_agent: String,
    /// Substring marking a URL as a Spotify page.
    pub spotify_host: String,
    pub search_prefix: String,
    pub filename_template: String,
    /// Codec passed to `--audio-format` for audio downloads.
    pub audio_format: String,
    /// Container passed to `--merge-output-format` for video downloads.
    pub merge_format: String,
    /// Create `<output_root>/Audio` or `<output_root>/Video` before downloading.
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            spotify_host: SPOTIFY_HOST.to_string(),
            search_prefix: SEARCH_PREFIX.to_string(),
            filename_template: FILENAME_TEMPLATE.to_string(),
            audio_format: "mp3".to_string(),
            merge_format: "mp4".to_string(),
            create_dirs: true,
        }
    }
}

impl Config {
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_yt_dlp() {
        let config = Config::default();
        assert_eq!(config.binary, "yt-dlp");
        assert_eq!(config.search_prefix, "ytsearch1:");
        assert_eq!(config.filename_template, "%(title)s.%(ext)s");
        assert_eq!(config.audio_format, "mp3");
        assert_eq!(config.merge_format, "mp4");
        assert!(config.create_dirs);
    }

    #[test]
    fn with_binary_overrides_only_the_binary() {
        let config = Config::default().with_binary("/opt/bin/yt-dlp");
        assert_eq!(config.binary, "/opt/bin/yt-dlp");
        assert_eq!(config.spotify_host, SPOTIFY_HOST);
    }
}
