use serde_json::Value;

use crate::{types::Candidate, ytmusic::SearchError};

const ARTIST_PAGE_TYPE: &str = "MUSIC_PAGE_TYPE_ARTIST";
const ALBUM_PAGE_TYPE: &str = "MUSIC_PAGE_TYPE_ALBUM";
const SEPARATOR: &str = " • ";

/// Extracts song candidates from a `search` response.
///
/// The result list sits either under the first tab of
/// `tabbedSearchResultsRenderer` (filtered searches) or directly under
/// `sectionListRenderer`. Every `musicShelfRenderer` in that list is walked in
/// order. Items lacking a title or a video id are skipped.
///
/// # Errors
///
/// Returns [`SearchError::Malformed`] when no section list can be found. A
/// section list without shelves yields an empty vector.
pub fn parse_search_results(response: &Value) -> Result<Vec<Candidate>, SearchError> {
    let sections = section_list(response).ok_or_else(|| {
        SearchError::Malformed("no section list in search response".to_string())
    })?;

    let candidates = sections
        .iter()
        .filter_map(|section| section.pointer("/musicShelfRenderer/contents"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
        .filter_map(parse_list_item)
        .collect();

    Ok(candidates)
}

fn section_list(response: &Value) -> Option<&Vec<Value>> {
    let contents = response.get("contents")?;
    let list = match contents.get("tabbedSearchResultsRenderer") {
        Some(tabbed) => tabbed.pointer("/tabs/0/tabRenderer/content/sectionListRenderer")?,
        None => contents.get("sectionListRenderer")?,
    };
    list.get("contents")?.as_array()
}

/// Builds a [`Candidate`] from a `musicResponsiveListItemRenderer`.
pub fn parse_list_item(renderer: &Value) -> Option<Candidate> {
    let title = flex_column_runs(renderer, 0)?
        .first()?
        .get("text")?
        .as_str()?
        .to_string();
    let video_id = video_id(renderer)?;

    let mut candidate = Candidate::new(title, video_id);
    if let Some(runs) = flex_column_runs(renderer, 1) {
        parse_song_runs(runs, &mut candidate);
    }
    Some(candidate)
}

fn flex_column_runs(renderer: &Value, index: usize) -> Option<&Vec<Value>> {
    renderer
        .get("flexColumns")?
        .get(index)?
        .pointer("/musicResponsiveListItemFlexColumnRenderer/text/runs")?
        .as_array()
}

fn video_id(renderer: &Value) -> Option<String> {
    renderer
        .pointer("/playlistItemData/videoId")
        .or_else(|| {
            renderer.pointer(
                "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId",
            )
        })
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

// Second column reads like "Song • Artist • Album • 3:05"; the leading type
// label only shows up in unfiltered searches.
fn parse_song_runs(runs: &[Value], candidate: &mut Candidate) {
    for run in runs {
        let Some(text) = run.get("text").and_then(Value::as_str) else {
            continue;
        };
        if text == SEPARATOR {
            continue;
        }

        let browse = run.pointer("/navigationEndpoint/browseEndpoint");
        let browse_id = browse
            .and_then(|b| b.get("browseId"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let page_type = browse
            .and_then(|b| {
                b.pointer("/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType")
            })
            .and_then(Value::as_str)
            .unwrap_or_default();

        if browse_id.starts_with("MPRE") || page_type == ALBUM_PAGE_TYPE {
            candidate.album = Some(text.to_string());
        } else if browse_id.starts_with("UC") || page_type == ARTIST_PAGE_TYPE {
            candidate.artists.push(text.to_string());
        } else if is_duration(text) {
            candidate.duration = Some(text.to_string());
        }
    }
}

/// True for `m:ss` and `h:mm:ss` style strings.
pub fn is_duration(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return false;
    }
    parts.iter().enumerate().all(|(i, part)| {
        let digits = !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        digits && (i == 0 || part.len() == 2)
    })
}
