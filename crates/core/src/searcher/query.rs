//! Search URL encoding.

use reqwest::Url;

use super::term_ids::{
    episode_id, language_id, quality_id, season_id, EPISODE_CATEGORY_ID, LANGUAGE_CATEGORY_ID,
    QUALITY_CATEGORY_ID, SEASON_CATEGORY_ID,
};
use super::types::SearchRequest;
use crate::client::{ClientError, FormatError};

pub(crate) const SEARCH_ENDPOINT: &str = "/torrents/search/";

/// Page size the API uses when no limit is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Query string of a search: the term filters, then `offset` and `limit`.
///
/// Filters without a known id are left out. `offset` and `limit` are always
/// present: without them the API returns them as numbers instead of strings.
pub fn search_query(request: &SearchRequest) -> String {
    let mut query = String::new();

    let terms = [
        (SEASON_CATEGORY_ID, season_id(request.season)),
        (EPISODE_CATEGORY_ID, episode_id(request.episode)),
        (
            LANGUAGE_CATEGORY_ID,
            request.language.as_deref().and_then(language_id),
        ),
        (
            QUALITY_CATEGORY_ID,
            request.quality.as_deref().and_then(quality_id),
        ),
    ];
    for (category, id) in terms {
        if let Some(id) = id {
            query.push_str(&format!("term[{}][]={}&", category, id));
        }
    }

    let limit = if request.limit == 0 {
        DEFAULT_LIMIT
    } else {
        request.limit
    };
    query.push_str(&format!("offset={}&limit={}", request.offset, limit));
    query
}

/// Full search URL for `request` against `base_url`.
pub fn build_search_url(base_url: &str, request: &SearchRequest) -> Result<Url, ClientError> {
    let raw = format!(
        "{}{}{}?{}",
        base_url.trim_end_matches('/'),
        SEARCH_ENDPOINT,
        urlencoding::encode(&request.title),
        search_query(request)
    );
    Url::parse(&raw).map_err(|e| {
        FormatError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        }
        .into()
    })
}
