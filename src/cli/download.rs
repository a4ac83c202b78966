use crate::{
    Res,
    config::Config,
    debug,
    error::AppError,
    spotify::{self, PageFetcher},
    success,
    types::DownloadRequest,
    utils::render_command,
    ytdlp::{ToolRunner, args},
};

use super::spinner;

pub const SUCCESS_MARKER: &str = "Success: Media downloaded successfully.";

/// Downloads one media item into `<output_root>/Audio` or `<output_root>/Video`.
///
/// Audio requests extract and transcode to the configured codec, video
/// requests merge into the configured container. The destination folder is
/// created first when `config.create_dirs` is set. yt-dlp's stderr is echoed
/// as a debug trace whatever the outcome.
///
/// # Output
///
/// The success marker line followed by yt-dlp's own stdout.
pub async fn download(
    config: &Config,
    runner: &dyn ToolRunner,
    fetcher: &dyn PageFetcher,
    request: &DownloadRequest,
) -> Res<String> {
    let target = spotify::resolve_target(config, fetcher, &request.url).await?;

    let destination = request.destination();
    if config.create_dirs {
        async_fs::create_dir_all(&destination)
            .await
            .map_err(|e| AppError::Io {
                path: destination.display().to_string(),
                source: e,
            })?;
    }

    let args = args::download_args(config, request, &target);
    let command = render_command(runner.binary(), &args);
    debug!("Executing command: {}", command);

    let pb = spinner("Downloading...");
    let result = runner.run(&args).await;
    pb.finish_and_clear();
    let result = result?;

    if !result.stderr.is_empty() {
        debug!("yt-dlp stderr:\n{}", result.stderr);
    }

    if !result.success() {
        return Err(AppError::DownloadFailed {
            command,
            details: result.stderr,
        });
    }

    success!(
        "Downloaded {} into {}",
        request.format_type,
        destination.display()
    );
    Ok(format!("{}\n{}", SUCCESS_MARKER, result.stdout))
}
