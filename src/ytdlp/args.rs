use crate::{
    config::Config,
    types::{DownloadRequest, FormatType},
};

/// `--flat-playlist -j <url>`: one JSON object per playlist member.
pub fn playlist_args(url: &str) -> Vec<String> {
    vec!["--flat-playlist".into(), "-j".into(), url.into()]
}

/// Predicts the output filename without downloading anything.
pub fn title_args(config: &Config, target: &str) -> Vec<String> {
    vec![
        "--print".into(),
        "filename".into(),
        "--no-playlist".into(),
        "-o".into(),
        config.filename_template.clone(),
        target.into(),
    ]
}

/// Full download into `<output_root>/<Audio|Video>/<title>.<ext>`.
///
/// `target` is the already resolved URL, which differs from `request.url`
/// when a Spotify link was rewritten into a search.
pub fn download_args(config: &Config, request: &DownloadRequest, target: &str) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "--verbose".into(),
        "-f".into(),
        request.quality_selector.clone(),
    ];

    match request.format_type {
        FormatType::Audio => args.extend([
            String::from("-x"),
            String::from("--audio-format"),
            config.audio_format.clone(),
        ]),
        FormatType::Video => args.extend([
            String::from("--merge-output-format"),
            config.merge_format.clone(),
        ]),
    }

    let template = request.destination().join(&config.filename_template);
    args.extend([
        String::from("--no-playlist"),
        String::from("-o"),
        template.to_string_lossy().into_owned(),
        target.to_string(),
    ]);

    args
}
