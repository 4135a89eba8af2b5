// src/fetch.rs

//! Outbound page fetching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::FetcherConfig;
use crate::error::{AppError, Result};
use crate::models::FetchedPage;

/// Retrieves the raw HTML of a remote page.
///
/// Trait-backed so the endpoint can be exercised without network access.
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// Fetch `url` and return its body text, or a typed error on any
    /// transport failure or non-2xx status. Never retries.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Production gateway backed by a shared reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured timeout and user agent.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchGateway for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed =
            Url::parse(url).map_err(|e| AppError::fetch(format!("invalid URL {url}: {e}")))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(format!("{url} returned status {status}")));
        }

        let effective_url = response.url().to_string();
        let body = response.text().await?;
        Ok(FetchedPage {
            body,
            url: effective_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetcherConfig {
            timeout_secs: 2,
            ..FetcherConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .mount(&server)
            .await;

        let page = fetcher()
            .fetch(&format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(page.body, "<html>hello</html>");
        assert!(page.url.ends_with("/page"));
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher().fetch(&server.uri()).await.unwrap_err();
        match err {
            AppError::Fetch(message) => assert!(message.contains("404")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_a_fetch_error() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_fails() {
        // Port 9 (discard) is assumed closed
        assert!(fetcher().fetch("http://127.0.0.1:9/").await.is_err());
    }
}
