//! # Spotify Module
//!
//! Spotify track pages cannot be handed to yt-dlp, so a Spotify link is
//! turned into a YouTube search instead. The page is fetched once, the
//! `<title>` element is read, the " - song by ..." / " | Spotify" decoration
//! is cut off, and the remainder becomes the query of a `ytsearch1:` target.
//!
//! Looking up a title never terminates the program. A failed fetch or a page
//! without a title yields `None`; [`resolve_target`] is where that turns into
//! a fatal [`AppError::SpotifyTitleUnavailable`].

pub mod page;

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    config::Config,
    error::AppError,
    info,
    types::MediaUrl,
    utils::clean_spotify_title,
    warning,
};

pub use page::{PageFetcher, ReqwestFetcher};

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<title>(.*?)</title>").expect("title pattern is valid")
});

/// Returns the cleaned `<title>` text of an HTML document, if any.
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str();
    let title = clean_spotify_title(raw);
    if title.is_empty() { None } else { Some(title) }
}

/// Fetches a Spotify page and reads the track title from it.
pub async fn get_title(fetcher: &dyn PageFetcher, url: &str) -> Option<String> {
    match fetcher.fetch(url).await {
        Ok(body) => extract_title(&body),
        Err(e) => {
            warning!("Error fetching Spotify URL: {}", e);
            None
        }
    }
}

/// Picks the target handed to yt-dlp for a user supplied URL.
///
/// Generic URLs pass through unchanged. Spotify URLs become
/// `ytsearch1:<title>`, or a fatal error when no title can be found.
pub async fn resolve_target(
    config: &Config,
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<String, AppError> {
    match MediaUrl::classify(url, &config.spotify_host) {
        MediaUrl::Generic(url) => Ok(url),
        MediaUrl::Spotify(url) => {
            info!("Spotify URL detected. Fetching title to search on YouTube...");
            let title = get_title(fetcher, &url)
                .await
                .ok_or(AppError::SpotifyTitleUnavailable)?;
            info!("Found title: '{}'. Searching on YouTube.", title);
            Ok(format!("{}{}", config.search_prefix, title))
        }
    }
}
