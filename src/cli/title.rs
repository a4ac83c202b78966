use crate::{
    Res,
    config::Config,
    debug,
    error::AppError,
    spotify::{self, PageFetcher},
    utils::render_command,
    ytdlp::{ToolRunner, args},
};

/// Returns the filename yt-dlp would write for `url`, without downloading.
///
/// Spotify links are resolved to a `ytsearch1:` query first. A non-zero exit
/// and an empty answer are both failures; on success the filename is
/// returned with surrounding whitespace trimmed.
pub async fn get_title(
    config: &Config,
    runner: &dyn ToolRunner,
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Res<String> {
    let target = spotify::resolve_target(config, fetcher, url).await?;

    let args = args::title_args(config, &target);
    debug!(
        "Executing command to get title: {}",
        render_command(runner.binary(), &args)
    );

    let result = runner.run(&args).await?;
    if !result.success() {
        return Err(AppError::TitleFailed(result.stderr));
    }

    let filename = result.stdout.trim();
    if filename.is_empty() {
        return Err(AppError::EmptyFilename);
    }

    Ok(filename.to_string())
}
