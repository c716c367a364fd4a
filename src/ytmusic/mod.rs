//! # YouTube Music Integration Module
//!
//! This module talks to the internal JSON API ("innertube") that the YouTube
//! Music web client uses. Only the unauthenticated search endpoint is
//! needed: one `POST search` call per lookup, restricted to a category via
//! an encoded `params` token.
//!
//! ## Architecture
//!
//! ```text
//! finder (query + best match)
//!          ↓
//! SongSearch trait
//!          ↓
//! YtMusicClient  ──→  parser (response JSON → Candidates)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! The client is built explicitly by the caller and handed to
//! [`crate::finder::find_url`]; there is no process-wide instance. Anything
//! implementing [`SongSearch`] can stand in for it, which is how the finder
//! is tested without network access.
//!
//! ## Error Handling
//!
//! Transport failures and non-2xx responses surface as
//! [`SearchError::Http`]. A response whose shape is not recognised surfaces
//! as [`SearchError::Malformed`]. Nothing is retried.

pub mod parser;
pub mod search;

use std::fmt;

use reqwest::Client;

use crate::{
    config,
    types::{Candidate, SearchFilter},
};

pub const CLIENT_NAME: &str = "WEB_REMIX";
pub const ORIGIN: &str = "https://music.youtube.com";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

#[derive(Debug)]
pub enum SearchError {
    Http(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Http(e) => write!(f, "request to YouTube Music failed: {}", e),
            SearchError::Malformed(msg) => {
                write!(f, "unexpected response from YouTube Music: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Http(e) => Some(e),
            SearchError::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Http(err)
    }
}

/// A music search capability.
///
/// Takes a free-text query plus a category filter and returns the matching
/// records in the order the service ranked them. An empty vector is a valid
/// answer.
pub trait SongSearch {
    fn search(
        &self,
        query: &str,
        filter: SearchFilter,
    ) -> impl Future<Output = Result<Vec<Candidate>, SearchError>>;
}

/// Unauthenticated YouTube Music web client.
pub struct YtMusicClient {
    client: Client,
    api_url: String,
    language: String,
    location: Option<String>,
}

impl YtMusicClient {
    /// Builds a client from the environment-backed settings in [`config`].
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(
            config::ytmusic_api_url(),
            config::ytmusic_language(),
            config::ytmusic_location(),
        )
    }

    pub fn with_settings(
        api_url: String,
        language: String,
        location: Option<String>,
    ) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_url,
            language,
            location,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl SongSearch for YtMusicClient {
    async fn search(
        &self,
        query: &str,
        filter: SearchFilter,
    ) -> Result<Vec<Candidate>, SearchError> {
        search::search(self, query, filter).await
    }
}
