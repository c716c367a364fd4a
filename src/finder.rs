//! Best-match lookup of a track on YouTube Music.
//!
//! [`find_url`] joins track, album and artist into one query, runs a
//! `songs` search and keeps the result whose title is most similar to the
//! track name. Similarity is [`matching::ratio_ignore_case`]; the first
//! candidate wins ties.

use std::fmt;

use crate::{
    matching,
    types::{Candidate, SearchFilter},
    ytmusic::{SearchError, SongSearch},
};

pub const WATCH_URL: &str = "https://music.youtube.com/watch?v=";

#[derive(Debug)]
pub enum FindError {
    Search(SearchError),
    NoCandidates { query: String },
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindError::Search(e) => write!(f, "{}", e),
            FindError::NoCandidates { query } => {
                write!(f, "No songs found for query \"{}\"", query)
            }
        }
    }
}

impl std::error::Error for FindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FindError::Search(e) => Some(e),
            FindError::NoCandidates { .. } => None,
        }
    }
}

impl From<SearchError> for FindError {
    fn from(err: SearchError) -> Self {
        FindError::Search(err)
    }
}

/// Finds the YouTube Music URL that best matches a track.
///
/// # Arguments
///
/// * `search` - Search capability to query, usually a [`crate::ytmusic::YtMusicClient`]
/// * `track_name` - Track title, also the reference for similarity scoring
/// * `album_name` - Album title, only used in the query
/// * `artist_name` - Artist name, only used in the query
///
/// # Returns
///
/// - `Ok(String)` - `https://music.youtube.com/watch?v=<id>` of the best candidate
/// - `Err(FindError::NoCandidates)` - The search returned nothing
/// - `Err(FindError::Search)` - The search itself failed
///
/// # Example
///
/// ```
/// let client = YtMusicClient::new()?;
/// let url = find_url(&client, "Imagine", "Imagine", "John Lennon").await?;
/// ```
pub async fn find_url<S: SongSearch>(
    search: &S,
    track_name: &str,
    album_name: &str,
    artist_name: &str,
) -> Result<String, FindError> {
    let (candidate, _) = find_best(search, track_name, album_name, artist_name).await?;
    Ok(watch_url(&candidate.video_id))
}

/// Like [`find_url`] but hands back the winning candidate and its score.
pub async fn find_best<S: SongSearch>(
    search: &S,
    track_name: &str,
    album_name: &str,
    artist_name: &str,
) -> Result<(Candidate, f64), FindError> {
    let query = build_query(track_name, album_name, artist_name);
    let mut candidates = search.search(&query, SearchFilter::Songs).await?;

    match best_match(track_name, &candidates) {
        Some((index, score)) => Ok((candidates.swap_remove(index), score)),
        None => Err(FindError::NoCandidates { query }),
    }
}

pub fn build_query(track_name: &str, album_name: &str, artist_name: &str) -> String {
    format!("{} {} {}", track_name, album_name, artist_name)
}

/// Index and score of the candidate whose title is closest to `track_name`.
///
/// Scans in order and only replaces the current best on a strictly greater
/// score, so the earliest candidate wins ties. `None` for an empty slice.
pub fn best_match(track_name: &str, candidates: &[Candidate]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let score = matching::ratio_ignore_case(track_name, &candidate.title);
        match best {
            Some((_, max)) if score <= max => {}
            _ => best = Some((index, score)),
        }
    }

    best
}

pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL, video_id)
}
