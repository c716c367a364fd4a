use serde::{Deserialize, Serialize};

/// One search result as returned by the music search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub video_id: String,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub duration: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_id: video_id.into(),
            artists: Vec::new(),
            album: None,
            duration: None,
        }
    }
}

/// Category restriction applied to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFilter {
    Songs,
}

impl SearchFilter {
    pub fn name(&self) -> &'static str {
        match self {
            SearchFilter::Songs => "songs",
        }
    }

    /// Encoded `params` value the web client sends for this filter.
    pub fn params(&self) -> &'static str {
        match self {
            SearchFilter::Songs => "EgWKAQIIAWoMEA4QChADEAQQCRAF",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub context: RequestContext,
    pub query: String,
    pub params: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    pub client: ClientInfo,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_name: String,
    pub client_version: String,
    pub hl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserInfo {}
