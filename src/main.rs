use std::path::PathBuf;

use clap::{
    Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};

use ytdlcli::{
    cli,
    config::Config,
    error,
    spotify::ReqwestFetcher,
    types::{DownloadRequest, FormatType},
    utils,
    ytdlp::SystemRunner,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  disable_help_subcommand = true,
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List a playlist as a JSON array of {id, title, thumbnail}
    GetPlaylistInfo {
        /// Playlist URL or ID
        #[clap(allow_hyphen_values = true)]
        url: String,
    },

    /// Print the filename yt-dlp would write, without downloading
    GetTitle {
        /// Media URL (Spotify track links are searched on YouTube)
        #[clap(allow_hyphen_values = true)]
        url: String,
    },

    /// Download a single media item
    Download {
        /// Media URL (Spotify track links are searched on YouTube)
        #[clap(allow_hyphen_values = true)]
        url: String,

        /// yt-dlp format selector, e.g. "bestaudio/best"
        quality: String,

        /// "audio" extracts mp3 into Audio/, anything else merges mp4 into Video/
        #[clap(value_parser = utils::parse_format_type)]
        format_type: FormatType,

        /// Directory holding the Audio/ and Video/ folders
        output_root: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => error!("Invalid arguments.\n{}", e),
    };

    let config = Config::default();
    let runner = SystemRunner::new(&config);
    let fetcher = ReqwestFetcher::new(&config);

    let result = match cli.command {
        Command::GetPlaylistInfo { url } => cli::get_playlist_info(&runner, &url).await,
        Command::GetTitle { url } => cli::get_title(&config, &runner, &fetcher, &url).await,
        Command::Download {
            url,
            quality,
            format_type,
            output_root,
        } => {
            let request = DownloadRequest {
                url,
                quality_selector: quality,
                format_type,
                output_root,
            };
            cli::download(&config, &runner, &fetcher, &request).await
        }
    };

    match result {
        Ok(payload) => println!("{}", payload),
        Err(e) => error!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ytdlcli").chain(args.iter().copied()))
    }

    #[test]
    fn accepts_each_action_with_its_arity() {
        assert!(parse(&["get-playlist-info", "PL123"]).is_ok());
        assert!(parse(&["get-title", "https://youtu.be/x"]).is_ok());
        assert!(parse(&["download", "https://youtu.be/x", "best", "video", "/tmp/out"]).is_ok());
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(parse(&["get-playlist-info"]).is_err());
        assert!(parse(&["get-title"]).is_err());
        assert!(parse(&["get-title", "a", "b"]).is_err());
        assert!(parse(&["download", "https://youtu.be/x", "best", "audio"]).is_err());
        assert!(parse(&["download", "u", "best", "audio", "/out", "extra"]).is_err());
    }

    #[test]
    fn rejects_unknown_or_missing_action() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["convert", "https://youtu.be/x"]).is_err());
        assert!(parse(&["help"]).is_err());
        assert!(parse(&["help", "download"]).is_err());
    }

    #[test]
    fn urls_may_start_with_a_hyphen() {
        let cli = parse(&["get-title", "-dQw4w9WgXcQ"]).unwrap();
        assert!(matches!(cli.command, Command::GetTitle { url } if url == "-dQw4w9WgXcQ"));

        let cli = parse(&["get-playlist-info", "-PLabc"]).unwrap();
        assert!(matches!(cli.command, Command::GetPlaylistInfo { url } if url == "-PLabc"));

        let cli = parse(&["download", "-dQw4w9WgXcQ", "best", "video", "/out"]).unwrap();
        assert!(matches!(cli.command, Command::Download { url, .. } if url == "-dQw4w9WgXcQ"));
    }

    #[test]
    fn download_arguments_map_onto_request_fields() {
        let cli = parse(&[
            "download",
            "https://youtu.be/x",
            "bestaudio",
            "audio",
            "/music",
        ])
        .unwrap();
        match cli.command {
            Command::Download {
                url,
                quality,
                format_type,
                output_root,
            } => {
                assert_eq!(url, "https://youtu.be/x");
                assert_eq!(quality, "bestaudio");
                assert_eq!(format_type, FormatType::Audio);
                assert_eq!(output_root, PathBuf::from("/music"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn non_audio_format_means_video() {
        let cli = parse(&["download", "u", "best", "mkv", "/out"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Download {
                format_type: FormatType::Video,
                ..
            }
        ));
    }
}
