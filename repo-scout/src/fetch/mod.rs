//! Listing page fetching.
//!
//! [`PageFetcher`] is the boundary for all network I/O. The production
//! implementation, [`ReqwestFetcher`], issues a single GET per page with the
//! client's default redirect and timeout behaviour and never retries.

mod error;

pub use error::FetchError;

use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::Html;
use tracing::{debug, warn};

/// A successfully fetched HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    url: String,
    body: String,
}

impl HtmlPage {
    /// Wraps a response body fetched from `url`.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// The URL the page was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as an HTML document.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Fetches one listing page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, returning the page on `200 OK` and an error otherwise.
    async fn fetch(&self, url: &str) -> Result<HtmlPage, FetchError>;
}

/// A [`PageFetcher`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Builds a fetcher that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<HtmlPage, FetchError> {
        debug!(url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "Unexpected response status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(HtmlPage::new(url, body))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn ok_response_returns_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new("repo-scout-test").unwrap();
        let url = format!("{}/octocat", server.uri());
        let page = fetcher.fetch(&url).await.unwrap();

        assert_eq!(page.url(), url);
        assert_eq!(page.body(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn non_ok_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new("repo-scout-test").unwrap();
        let url = format!("{}/missing", server.uri());
        let error = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(error, FetchError::Status { url, status: 404 });
    }

    #[tokio::test]
    async fn other_success_codes_are_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new("repo-scout-test").unwrap();
        let error = fetcher
            .fetch(&format!("{}/empty", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::Status { status: 204, .. }));
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "scout/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new("scout/1.0").unwrap();
        let page = fetcher.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.body(), "ok");
    }

    #[tokio::test]
    async fn refused_connection_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/octocat", listener.local_addr().unwrap());
        drop(listener);

        let fetcher = ReqwestFetcher::new("repo-scout-test").unwrap();
        let error = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(error, FetchError::Transport { .. }));
        assert_eq!(error.url(), url);
    }
}
