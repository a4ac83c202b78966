use crate::{
    Res, debug,
    error::AppError,
    utils::{parse_playlist_lines, playlist_failure_details, render_command},
    ytdlp::{ToolRunner, args},
};

use super::spinner;

/// Lists a playlist and returns its entries as one JSON array.
///
/// yt-dlp runs in flat mode and prints one JSON object per member. The
/// listing fails when the tool exits non-zero or prints nothing, and also
/// when any single line is not a JSON object, in which case entries already
/// parsed are discarded. Records lacking an `id` or `title` are skipped.
///
/// # Output
///
/// ```text
/// [{"id":"dQw4w9WgXcQ","title":"Never Gonna Give You Up","thumbnail":null}]
/// ```
pub async fn get_playlist_info(runner: &dyn ToolRunner, url: &str) -> Res<String> {
    let args = args::playlist_args(url);
    debug!("Executing command: {}", render_command(runner.binary(), &args));

    let pb = spinner("Fetching playlist entries...");
    let result = runner.run(&args).await;
    pb.finish_and_clear();
    let result = result?;

    if !result.stderr.is_empty() {
        debug!("yt-dlp stderr:\n{}", result.stderr);
    }

    if !result.success() || result.stdout.trim().is_empty() {
        return Err(AppError::PlaylistFailed {
            code: result.exit_code,
            details: playlist_failure_details(&result),
        });
    }

    let entries = parse_playlist_lines(&result.stdout).map_err(AppError::MalformedRecord)?;
    serde_json::to_string(&entries).map_err(AppError::Serialize)
}
