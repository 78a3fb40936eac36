//! Detection of API errors hidden in successful responses.

use crate::client::ApiError;

/// Split a response body into a payload or an API error.
///
/// The API answers most logical failures with HTTP 200 and a
/// `{"code": <int>, "error": "<text>"}` body. The body is always decoded as
/// that envelope first: a decode failure or an empty `error` text means the
/// body is a regular payload and it is returned unchanged.
pub fn extract_payload(body: &[u8]) -> Result<&[u8], ApiError> {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(envelope) if !envelope.text.is_empty() => Err(envelope),
        _ => Ok(body),
    }
}
