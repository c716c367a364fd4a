//! YouTube Music track matcher library
//!
//! This library looks up a track on YouTube Music and picks the search result
//! whose title is closest to the requested track name. The binary is a thin
//! wrapper around [`cli::find`].
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `finder` - Query construction and best-match selection
//! - `matching` - Sequence-matching similarity ratio
//! - `types` - Data structures and type definitions
//! - `ytmusic` - YouTube Music search client implementation
//!
//! # Example
//!
//! ```
//! use ytmatch::{finder, ytmusic::YtMusicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YtMusicClient::new()?;
//!     let url = finder::find_url(&client, "Imagine", "Imagine", "John Lennon").await?;
//!     println!("{}", url);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod finder;
pub mod matching;
pub mod types;
pub mod ytmusic;

/// Prints an informational message with a blue bullet point.
///
/// Output goes to stderr, stdout is reserved for the resulting URL.
///
/// # Example
///
/// ```
/// info!("Searching for: {} - {}", artist, track);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only use
/// it for fatal errors at the CLI layer.
///
/// # Example
///
/// ```
/// error!("Search failed: {}", e);
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

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
