//! Picking and downloading `.torrent` files.

use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Method;
use tracing::{debug, info};

use super::filters::{pick_best, select_candidates};
use super::types::{SearchRequest, Torrent};
use crate::client::{checked_payload, ClientError, FormatError, T411Client};

pub(crate) const DOWNLOAD_ENDPOINT: &str = "/torrents/download";

const TORRENT_SUFFIX: &str = ".torrent";

impl T411Client {
    /// Search with `request`, pick the candidate with the most seeders and
    /// download it.
    ///
    /// Candidates are filtered on name, on partial releases for a whole
    /// season, and on the air date when the request carries one.
    pub async fn download_torrent_by_terms(
        &self,
        request: &SearchRequest,
    ) -> Result<PathBuf, ClientError> {
        let result = self.search_all_torrents_by_terms(request).await?;
        let found = result.torrents.len();
        let candidates = select_candidates(result.torrents, request, self.config().max_delay_hours);

        debug!(
            request = %request,
            found = found,
            candidates = candidates.len(),
            "Filtered search results"
        );

        let best =
            pick_best(candidates).ok_or_else(|| ClientError::TorrentNotFound(request.to_string()))?;
        self.download_torrent(&best).await
    }

    /// Download `torrent` once the ratio and verification guards pass.
    pub async fn download_torrent(&self, torrent: &Torrent) -> Result<PathBuf, ClientError> {
        if self.config().keep_ratio {
            let ratio = self.own_ratio(torrent.size_bytes()?).await?;
            if ratio < 1.0 {
                return Err(ClientError::RatioTooLow { ratio });
            }
        }
        if self.config().only_verified && !torrent.is_verified() {
            return Err(ClientError::NotVerified(torrent.id.clone()));
        }
        self.download_torrent_by_id(&torrent.id).await
    }

    /// Download a torrent file into the temp directory under the name given
    /// by the `Content-Disposition` header.
    pub async fn download_torrent_by_id(&self, id: &str) -> Result<PathBuf, ClientError> {
        let (disposition, body) = self.download_body(id).await?;
        let disposition = disposition.ok_or_else(|| {
            FormatError::ContentDisposition("missing header".to_string())
        })?;
        let filename = parse_content_disposition(&disposition)?;

        let path = std::env::temp_dir().join(filename);
        tokio::fs::write(&path, &body).await?;

        info!(id = id, path = %path.display(), "Downloaded torrent");
        Ok(path)
    }

    /// Download a torrent file into a new temp file named
    /// `<prefix><random>.torrent`.
    pub async fn download_torrent_with_prefix(
        &self,
        id: &str,
        prefix: &str,
    ) -> Result<PathBuf, ClientError> {
        let (_, body) = self.download_body(id).await?;
        let path = new_temp_file(prefix, &std::env::temp_dir())?;
        tokio::fs::write(&path, &body).await?;

        info!(id = id, path = %path.display(), "Downloaded torrent");
        Ok(path)
    }

    /// The `Content-Disposition` header, if any, and the checked body.
    async fn download_body(&self, id: &str) -> Result<(Option<String>, Vec<u8>), ClientError> {
        let url = self.url(&format!(
            "{}/{}",
            DOWNLOAD_ENDPOINT,
            urlencoding::encode(id)
        ))?;
        let response = self.send(Method::GET, url, None).await?;

        let status = response.status();
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        let body = response.bytes().await?;
        let payload = checked_payload(status, &body)?;

        Ok((disposition, payload.to_vec()))
    }
}

/// Create an empty, persisted file `<dir>/<prefix>XXXXXX.torrent`.
fn new_temp_file(prefix: &str, dir: &Path) -> Result<PathBuf, ClientError> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(TORRENT_SUFFIX)
        .tempfile_in(dir)?;
    let (_, path) = file.keep().map_err(|e| ClientError::Io(e.error))?;
    Ok(path)
}

/// The quoted filename of a `Content-Disposition` header.
///
/// `attachment; filename="a.torrent"` gives `a.torrent`. The name must be a
/// plain file name: empty names and path separators are rejected.
pub fn parse_content_disposition(header: &str) -> Result<String, FormatError> {
    let invalid = || FormatError::ContentDisposition(header.to_string());

    let start = header.find('"').ok_or_else(invalid)? + 1;
    let len = header[start..].find('"').ok_or_else(invalid)?;
    let filename = &header[start..start + len];

    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\'])
    {
        return Err(invalid());
    }
    Ok(filename.to_string())
}
