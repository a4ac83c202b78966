//! yt-dlp adapter CLI library
//!
//! This library backs the `ytdlcli` binary, a small adapter that lets a calling
//! application list playlists, predict output filenames and download media by
//! driving the external `yt-dlp` tool. Spotify track links are not downloadable
//! directly, so they are resolved to a YouTube search through the page title.
//!
//! # Modules
//!
//! - `cli` - One implementation per command-line action
//! - `config` - Runtime configuration values
//! - `error` - Fatal error taxonomy
//! - `spotify` - Spotify URL classification and title lookup
//! - `types` - Data structures and type definitions
//! - `utils` - Pure text transformations over tool output
//! - `ytdlp` - The external tool seam and argument builders
//!
//! # Output contract
//!
//! Every success payload goes to stdout. Everything else, including the
//! diagnostic macros defined below, goes to stderr.

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod ytdlp;

pub use error::AppError;

/// A convenient Result type alias for operations that may fail.
///
/// # Example
///
/// ```
/// use ytdlcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, AppError>;

/// Prints an informational message with a blue bullet point to stderr.
///
/// # Example
///
/// ```
/// info!("Spotify URL detected. Fetching title to search on YouTube...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark to stderr.
///
/// The payload of a successful action is printed separately on stdout, this
/// only reports progress to whoever watches the error stream.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a raw diagnostic line to stderr.
///
/// Used for the exact command line handed to yt-dlp and for echoing the
/// tool's own stderr. Never written to stdout.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "DEBUG".dimmed(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 right after printing. Only used for fatal
/// errors, which is every error that reaches `main`.
///
/// # Example
///
/// ```
/// error!("Unknown action '{}'", action);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable issues, such as a Spotify page that could not be
/// fetched. The caller decides whether that ends the run.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
