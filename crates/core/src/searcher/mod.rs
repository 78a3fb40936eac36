//! Torrent search, result filtering and download.
//!
//! Searches are encoded by [`build_search_url`]; the picked torrent goes
//! through the filters in [`filters`] before being downloaded.

mod download;
pub mod filters;
mod query;
pub mod term_ids;
mod types;

pub use download::parse_content_disposition;
pub use query::{build_search_url, search_query, DEFAULT_LIMIT};
pub use types::*;

use reqwest::Url;
use tracing::debug;

use crate::client::{ClientError, T411Client};
use query::SEARCH_ENDPOINT;

const DETAILS_ENDPOINT: &str = "/torrents/details";

impl T411Client {
    /// Search URL for `request` on this client's base URL.
    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, ClientError> {
        build_search_url(self.base_url(), request)
    }

    /// One page of results for `request`.
    pub async fn search_torrents_by_terms(
        &self,
        request: &SearchRequest,
    ) -> Result<Torrents, ClientError> {
        let url = self.search_url(request)?;
        debug!(request = %request, "Searching torrents");
        self.fetch(SEARCH_ENDPOINT, url).await
    }

    /// Every result for `request`.
    ///
    /// When the first page is short of `total`, the search is sent again from
    /// offset 0 with `limit = total`.
    pub async fn search_all_torrents_by_terms(
        &self,
        request: &SearchRequest,
    ) -> Result<Torrents, ClientError> {
        let first = self.search_torrents_by_terms(request).await?;
        let total: u32 = first
            .total
            .trim()
            .parse()
            .map_err(|_| ClientError::InvalidField {
                field: "total",
                value: first.total.clone(),
            })?;

        if first.torrents.len() as u64 >= u64::from(total) {
            return Ok(first);
        }

        debug!(
            request = %request,
            total = total,
            fetched = first.torrents.len(),
            "Fetching remaining results"
        );
        let all = request.clone().offset(0).limit(total);
        self.search_torrents_by_terms(&all).await
    }

    /// Details of the torrent with id `id`.
    pub async fn torrents_details(&self, id: &str) -> Result<TorrentDetails, ClientError> {
        let url = self.url(&format!(
            "{}/{}",
            DETAILS_ENDPOINT,
            urlencoding::encode(id)
        ))?;
        self.fetch(DETAILS_ENDPOINT, url).await
    }
}
