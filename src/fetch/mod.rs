//! HTTP fetcher
//!
//! One GET per article, with outcomes folded into an enum so the search
//! engine can apply its fetch-failure policy without unwinding: a missing
//! page and a transport error are data here, not errors.

use reqwest::Client;
use std::time::Duration;

/// Result of fetching a single article
#[derive(Debug)]
pub enum FetchOutcome {
    /// Page fetched, body ready for link extraction
    Success { body: String },

    /// Server answered with a non-success status (missing article, etc.)
    HttpError { status: u16 },

    /// Connection-level failure (refused, timeout, TLS, ...)
    NetworkError { error: String },
}

/// Builds the HTTP client used for all article fetches
///
/// Redirects are followed with the client's default policy; article titles
/// commonly resolve through one.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one article URL
///
/// Any non-success status after redirects is reported as `HttpError`.
pub async fn fetch_article(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/A"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>A</html>"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let outcome = fetch_article(&client, &format!("{}/wiki/A", server.uri())).await;

        match outcome {
            FetchOutcome::Success { body } => assert_eq!(body, "<html>A</html>"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_page_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let outcome = fetch_article(&client, &format!("{}/wiki/Missing", server.uri())).await;

        assert!(matches!(outcome, FetchOutcome::HttpError { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_server_is_network_error() {
        let client = build_http_client().unwrap();
        // Nothing listens on this port.
        let outcome = fetch_article(&client, "http://127.0.0.1:1/wiki/A").await;

        assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    }
}
