use chrono::{NaiveDate, Utc};
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN as ORIGIN_HEADER};
use serde_json::Value;

use crate::{
    types::{Candidate, ClientInfo, RequestContext, SearchFilter, SearchRequest, UserInfo},
    ytmusic::{CLIENT_NAME, ORIGIN, SearchError, YtMusicClient, parser},
};

/// Runs a filtered search against the YouTube Music `search` endpoint.
///
/// Sends a single `POST {api_url}search?alt=json` request whose body carries
/// the web client context, the free-text query and the filter's encoded
/// `params`. The response is handed to [`parser::parse_search_results`].
///
/// # Arguments
///
/// * `client` - Configured client holding the HTTP connection pool and locale
/// * `query` - Free-text search query, sent verbatim
/// * `filter` - Category restriction for the results
///
/// # Returns
///
/// - `Ok(Vec<Candidate>)` - Results in service order, possibly empty
/// - `Err(SearchError::Http)` - Network error or non-2xx status
/// - `Err(SearchError::Malformed)` - Response body without a result list
///
/// # Example
///
/// ```
/// let client = YtMusicClient::new()?;
/// let songs = search(&client, "Imagine John Lennon", SearchFilter::Songs).await?;
/// ```
pub async fn search(
    client: &YtMusicClient,
    query: &str,
    filter: SearchFilter,
) -> Result<Vec<Candidate>, SearchError> {
    let api_url = format!("{uri}search?alt=json", uri = client.api_url);
    let body = build_search_request(
        query,
        filter,
        &client.language,
        client.location.clone(),
        Utc::now().date_naive(),
    );

    let response = client
        .client
        .post(&api_url)
        .header(ACCEPT, "*/*")
        .header(CONTENT_TYPE, "application/json")
        .header(ORIGIN_HEADER, ORIGIN)
        .header("X-Goog-AuthUser", "0")
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<Value>().await?;
    parser::parse_search_results(&res)
}

/// Builds the request body for a search on the given day.
///
/// The web client version embeds the current date, which the service
/// expects to look recent.
pub fn build_search_request(
    query: &str,
    filter: SearchFilter,
    language: &str,
    location: Option<String>,
    today: NaiveDate,
) -> SearchRequest {
    SearchRequest {
        context: RequestContext {
            client: ClientInfo {
                client_name: CLIENT_NAME.to_string(),
                client_version: client_version(today),
                hl: language.to_string(),
                gl: location,
            },
            user: UserInfo::default(),
        },
        query: query.to_string(),
        params: filter.params().to_string(),
    }
}

pub fn client_version(today: NaiveDate) -> String {
    format!("1.{}.01.00", today.format("%Y%m%d"))
}
