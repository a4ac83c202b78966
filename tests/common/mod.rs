use std::sync::Mutex;

use async_trait::async_trait;
use ytdlcli::{AppError, spotify::PageFetcher, types::ProcessResult, ytdlp::ToolRunner};

/// Records every argument vector and answers with a canned result.
pub struct FakeRunner {
    result: Option<ProcessResult>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn returning(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            result: Some(ProcessResult {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a binary missing from the search path.
    pub fn missing() -> Self {
        Self {
            result: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    fn binary(&self) -> &str {
        "yt-dlp"
    }

    async fn run(&self, args: &[String]) -> Result<ProcessResult, AppError> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.result.clone().ok_or(AppError::ToolNotFound {
            binary: "yt-dlp".to_string(),
        })
    }
}

/// Serves a fixed page body, or fails like an unreachable host.
pub struct FakeFetcher {
    body: Option<String>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.body {
            Some(body) => Ok(body.clone()),
            // A request that cannot even be built yields a genuine reqwest::Error.
            None => Err(reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err()),
        }
    }
}

pub const SPOTIFY_TRACK: &str = "https://open.spotify.com/track/6xGruZOHLs39ZbVccQTuPZ";

pub const SPOTIFY_PAGE: &str =
    "<!DOCTYPE html><html><head><title>Glimpse of Us - song by Joji | Spotify</title></head></html>";
