//! # CLI Module
//!
//! One implementation per action of the `ytdlcli` binary:
//!
//! - [`get_playlist_info`] - Lists a playlist as a single JSON array
//! - [`get_title`] - Predicts the filename yt-dlp would write for a URL
//! - [`download`] - Downloads a URL into the Audio or Video folder
//!
//! Every action returns the exact text meant for stdout, or an [`AppError`]
//! whose message `main` prints to stderr before exiting with status 1.
//! Diagnostics emitted while working (the command line, yt-dlp's stderr)
//! always go to stderr through the crate's logging macros.
//!
//! The collaborators, yt-dlp and the web, are passed in as
//! [`ToolRunner`](crate::ytdlp::ToolRunner) and
//! [`PageFetcher`](crate::spotify::PageFetcher) so the actions run unchanged
//! against fakes in the tests.
//!
//! [`AppError`]: crate::error::AppError

mod download;
mod playlist;
mod title;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use download::{SUCCESS_MARKER, download};
pub use playlist::get_playlist_info;
pub use title::get_title;

/// Stderr spinner shown while yt-dlp runs. Hidden when stderr is not a terminal.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
