//! Request signing and execution.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ClientError, FormatError, T411Client};
use crate::response::{decode, extract_payload};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("t411-client/", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl T411Client {
    /// Join `path` to the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| {
            FormatError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Send a single request.
    ///
    /// Signed with the session token when there is one; before authentication
    /// the form content type is set instead. Failures are returned as is,
    /// nothing is retried.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        form: Option<&[(&str, &str)]>,
    ) -> Result<Response, ClientError> {
        let mut request = self.client.request(method.clone(), url.clone());

        {
            let token = self.token.read().await;
            request = match token.as_ref() {
                Some(t) if !t.token.is_empty() => request.header(AUTHORIZATION, t.token.as_str()),
                _ => request.header(CONTENT_TYPE, FORM_CONTENT_TYPE),
            };
        }

        request = request
            .header(ACCEPT, "application/json")
            .header(USER_AGENT_HEADER, USER_AGENT);

        if let Some(form) = form {
            request = request.form(form);
        }

        debug!(method = %method, path = url.path(), "Sending t411 request");
        Ok(request.send().await?)
    }

    /// GET `url` and decode the response into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: Url,
    ) -> Result<T, ClientError> {
        let query = url.query().unwrap_or_default().to_string();
        let response = self.send(Method::GET, url, None).await?;
        self.read_payload(response, endpoint, &query).await
    }

    /// Read a response body, surface API errors, then repair and decode it.
    pub(crate) async fn read_payload<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
        query: &str,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;
        let payload = checked_payload(status, &body)?;
        decode(payload, endpoint, query)
    }
}

/// Run the error discriminator, then reject non-success statuses.
///
/// The envelope check comes first since the API reports most failures in
/// the body, whatever the status.
pub(crate) fn checked_payload(status: StatusCode, body: &[u8]) -> Result<&[u8], ClientError> {
    let payload = extract_payload(body)?;
    if !status.is_success() {
        return Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).chars().take(200).collect(),
        });
    }
    Ok(payload)
}
