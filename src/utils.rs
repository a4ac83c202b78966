use serde_json::{Map, Value};

use crate::types::{FormatType, PlaylistEntry, ProcessResult};

const SONG_BY_MARKER: &str = " - song by";
const SPOTIFY_SUFFIX_MARKER: &str = " | Spotify";

/// Reshapes yt-dlp's one-object-per-line output into playlist entries.
///
/// Blank lines are skipped. A line that is not a JSON object fails the whole
/// call so no partial list ever escapes. Records without a usable `id` and
/// `title` are dropped silently; order is preserved for the rest.
pub fn parse_playlist_lines(output: &str) -> Result<Vec<PlaylistEntry>, serde_json::Error> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: Map<String, Value> = serde_json::from_str(line)?;
        if let Some(entry) = entry_from_record(&record) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn entry_from_record(record: &Map<String, Value>) -> Option<PlaylistEntry> {
    let id = non_empty_str(record.get("id"))?;
    let title = non_empty_str(record.get("title"))?;

    Some(PlaylistEntry {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: record.get("thumbnail").filter(|v| !v.is_null()).cloned(),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Strips the Spotify decoration from a page title.
///
/// `"Glimpse of Us - song by Joji | Spotify"` becomes `"Glimpse of Us"`.
pub fn clean_spotify_title(raw: &str) -> String {
    let cut = [SONG_BY_MARKER, SPOTIFY_SUFFIX_MARKER]
        .iter()
        .filter_map(|marker| raw.find(marker))
        .min()
        .unwrap_or(raw.len());

    raw[..cut].trim().to_string()
}

/// Renders a command line the way it is echoed in diagnostics.
pub fn render_command(binary: &str, args: &[String]) -> String {
    std::iter::once(binary)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Explains why a playlist listing produced nothing usable.
pub fn playlist_failure_details(result: &ProcessResult) -> String {
    let mut details = String::new();

    if result.stdout.trim().is_empty() {
        details.push_str("Reason: yt-dlp produced no video data (stdout was empty).\n");
    }

    if result.stderr.trim().is_empty() {
        details.push_str("yt-dlp provided no error details (stderr was empty).");
    } else {
        details.push_str("Details from yt-dlp:\n");
        details.push_str(&result.stderr);
    }

    details
}

/// clap value parser for the download format argument; never rejects.
pub fn parse_format_type(value: &str) -> Result<FormatType, String> {
    Ok(FormatType::from_arg(value))
}
