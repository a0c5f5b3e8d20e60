//! HTTP fetcher implementation
//!
//! This module issues the GET requests for the crawler. A fetch succeeds
//! only when the server answers with status 200; every other status and
//! every transport failure is reported as a [`FetchError`].

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Reasons a page could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request never completed (DNS, connection, invalid URL, body read)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } => url,
        }
    }
}

/// Builds an HTTP client for the crawler
///
/// No timeout or redirect policy is configured, so the transport defaults
/// apply. When `user_agent` is `None` reqwest's own user agent is sent.
///
/// # Example
///
/// ```no_run
/// use page_gleaner::crawler::build_http_client;
///
/// let client = build_http_client(Some("page-gleaner/0.1")).unwrap();
/// ```
pub fn build_http_client(user_agent: Option<&str>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder.build()
}

/// Single-shot page fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns its decoded body
    ///
    /// One GET per call, no retry. The URL is not validated here; a
    /// malformed URL comes back as [`FetchError::Transport`].
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches `url`, collapsing every failure into `None`
    pub async fn fetch(&self, url: &str) -> Option<String> {
        self.fetch_page(url).await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some("TestCrawler/1.0")).is_ok());
    }

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            url: "http://a.test".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "unexpected status 404 for http://a.test");
        assert_eq!(err.url(), "http://a.test");
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_failure() {
        let fetcher = Fetcher::new(build_http_client(None).unwrap());

        let result = fetcher.fetch_page("not a url").await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
        assert_eq!(fetcher.fetch("not a url").await, None);
    }
}
