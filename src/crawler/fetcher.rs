//! HTTP fetcher implementation
//!
//! One persistent client per crawl, a realistic browser user-agent, and a
//! single recovery path: a 403 carrying the Mod-Security marker is retried
//! once with a blank Referer.

use crate::config::FetcherConfig;
use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Body marker of a web-application-firewall rejection that is recoverable
/// by retrying with a blank Referer
const MOD_SECURITY_MARKER: &str = "mod_security";

/// Errors for a single page fetch
///
/// The engine treats every variant the same way: log, count the page as
/// contributing zero links, continue the crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("expected HTML from {url}, got {content_type}")]
    ContentMismatch { url: String, content_type: String },
}

/// Builds the HTTP client shared by all fetches of one crawl
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its HTML body
///
/// # Request Flow
///
/// 1. GET the URL (redirects followed by the client)
/// 2. If the response is 403 and the body carries the Mod-Security marker,
///    GET once more with an explicitly empty Referer header
/// 3. Non-success status, transport failure, or a non-HTML Content-Type
///    is an error; a missing Content-Type header is accepted
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let (mut status, mut content_type, mut body) = send(client, url, false).await?;

    if status == StatusCode::FORBIDDEN && body.contains(MOD_SECURITY_MARKER) {
        tracing::debug!(
            "Mod-Security rejection from {}, retrying with blank Referer",
            url
        );
        (status, content_type, body) = send(client, url, true).await?;
    }

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_type) = content_type {
        if !content_type.contains("text/html") {
            return Err(FetchError::ContentMismatch {
                url: url.to_string(),
                content_type,
            });
        }
    }

    Ok(body)
}

async fn send(
    client: &Client,
    url: &str,
    blank_referer: bool,
) -> Result<(StatusCode, Option<String>, String), FetchError> {
    let mut request = client.get(url);
    if blank_referer {
        request = request.header(REFERER, "");
    }

    let response = request.send().await.map_err(|e| classify(url, e))?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.map_err(|e| classify(url, e))?;

    Ok((status, content_type, body))
}

fn classify(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetcherConfig;

    #[test]
    fn test_build_http_client() {
        let config = FetcherConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_custom_agent() {
        let config = FetcherConfig {
            user_agent: "TestAgent/1.0".to_string(),
            ..FetcherConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }

    // Response handling is covered with mock servers in tests/crawl_tests.rs
}
