//! HTTP client for the upstream Bot API.
//!
//! # Design Decisions
//! - A request is a pure function of (URL, optional JSON body); nothing is cached
//! - No outbound timeout: a hanging upstream holds its one in-flight request, as
//!   the reference behavior does
//! - Network failures surface as `reqwest::Error` and are mapped by the caller

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::IntoUrl;
use serde_json::Value;

/// User-Agent sent on every outbound call.
pub const RELAY_USER_AGENT: &str = "Telegram Api Request";

/// Client for the upstream Bot API and for webhook callback targets.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: String,
}

impl UpstreamClient {
    /// Create a client for the given Bot API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Bot API method endpoint: `{base}/bot{token}/{method}`.
    pub fn api_url(&self, token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.base, token, method)
    }

    /// File download endpoint: `{base}/file/bot{token}/{path}`.
    pub fn file_url(&self, token: &str, path: &str) -> String {
        format!("{}/file/bot{}/{}", self.base, token, path)
    }

    async fn send(
        &self,
        url: impl IntoUrl,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        // GET without a body, POST with one; .json() sets the JSON content-type.
        let request = match body {
            Some(json) => self.http.post(url).json(json),
            None => self.http.get(url),
        };
        request.header(USER_AGENT, RELAY_USER_AGENT).send().await
    }

    /// Perform a call and return the response body as text.
    pub async fn fetch_text(
        &self,
        url: impl IntoUrl,
        body: Option<&Value>,
    ) -> Result<String, reqwest::Error> {
        self.send(url, body).await?.text().await
    }

    /// Perform a body-less call and return the raw payload together with the
    /// response content-type, when the upstream sent one.
    pub async fn fetch_with_content_type(
        &self,
        url: impl IntoUrl,
    ) -> Result<(Bytes, Option<String>), reqwest::Error> {
        let response = self.send(url, None).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let payload = response.bytes().await?;
        Ok((payload, content_type))
    }

    /// Call a Bot API method for the given token.
    pub async fn api_request(
        &self,
        token: &str,
        method: &str,
        body: Option<&Value>,
    ) -> Result<String, reqwest::Error> {
        self.fetch_text(self.api_url(token, method), body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client = UpstreamClient::new("https://api.telegram.org");
        assert_eq!(
            client.api_url("123:ABC", "getMe"),
            "https://api.telegram.org/bot123:ABC/getMe"
        );
    }

    #[test]
    fn test_file_url_preserves_inner_slashes() {
        let client = UpstreamClient::new("https://api.telegram.org");
        assert_eq!(
            client.file_url("123:ABC", "photos/file_0.jpg"),
            "https://api.telegram.org/file/bot123:ABC/photos/file_0.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = UpstreamClient::new("http://127.0.0.1:9000/");
        assert_eq!(client.api_url("t", "getMe"), "http://127.0.0.1:9000/bott/getMe");
    }
}
