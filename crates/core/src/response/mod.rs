//! Response handling: error envelope detection, repair and decoding.
//!
//! Every body goes through [`extract_payload`] first, then [`repair`], then
//! `serde_json`.

mod envelope;
mod repair;

pub use envelope::extract_payload;
pub use repair::repair;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::ClientError;

/// Repair a payload and decode it into `T`.
///
/// `endpoint` and `query` only feed the log line and the error.
pub fn decode<T: DeserializeOwned>(
    payload: &[u8],
    endpoint: &str,
    query: &str,
) -> Result<T, ClientError> {
    let repaired = repair(payload);
    serde_json::from_slice(&repaired).map_err(|source| {
        warn!(
            endpoint = endpoint,
            query = query,
            error = %source,
            "Failed to decode API response"
        );
        ClientError::Decode {
            endpoint: endpoint.to_string(),
            query: query.to_string(),
            source,
        }
    })
}
