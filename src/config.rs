//! Configuration management for the YouTube Music track matcher.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Every setting has a sensible
//! default, so a missing `.env` file is not an error.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_YTMUSIC_API_URL: &str = "https://music.youtube.com/youtubei/v1/";
pub const DEFAULT_YTMUSIC_LANGUAGE: &str = "en";

/// Loads environment variables from `.env` files.
///
/// Creates the `ytmatch` directory below the platform-specific local data
/// directory if it doesn't exist and loads `ytmatch/.env` from there when
/// present. A `.env` in the working directory is loaded first and wins over
/// the one in the data directory, since `dotenv` never overrides variables
/// that are already set.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/ytmatch/.env`
/// - macOS: `~/Library/Application Support/ytmatch/.env`
/// - Windows: `%LOCALAPPDATA%/ytmatch/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the user's `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ytmatch/.env");
    path
}

/// Returns the base URL of the YouTube Music internal API.
///
/// Reads `YTMUSIC_API_URL` and falls back to
/// [`DEFAULT_YTMUSIC_API_URL`]. A trailing slash is appended when missing so
/// endpoint names can be joined directly.
///
/// # Example
///
/// ```
/// let api_url = ytmusic_api_url(); // e.g., "https://music.youtube.com/youtubei/v1/"
/// ```
pub fn ytmusic_api_url() -> String {
    let mut url =
        env::var("YTMUSIC_API_URL").unwrap_or_else(|_| DEFAULT_YTMUSIC_API_URL.to_string());
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Returns the interface language sent as `hl` with each request.
///
/// Reads `YTMUSIC_LANGUAGE`, defaults to `en`.
pub fn ytmusic_language() -> String {
    env::var("YTMUSIC_LANGUAGE").unwrap_or_else(|_| DEFAULT_YTMUSIC_LANGUAGE.to_string())
}

/// Returns the optional content location sent as `gl` with each request.
///
/// Reads `YTMUSIC_LOCATION` (an ISO 3166-1 alpha-2 code such as `DE`). Empty
/// values count as unset.
pub fn ytmusic_location() -> Option<String> {
    env::var("YTMUSIC_LOCATION")
        .ok()
        .filter(|location| !location.trim().is_empty())
}
