use anyhow::Result;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Plain GET client. No retries and no backoff: a failed fetch is reported
/// once and the caller decides whether to continue.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(PageFetcher { client })
    }

    pub async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    }

    /// Body text, or `None` after reporting the failure.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                println!("Error fetching {}: {}", url, e);
                warn!(url, error = %e, "fetch failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shop/"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("Mozilla/5.0").unwrap();
        let body = fetcher.fetch(&format!("{}/shop/", server.uri())).await;
        assert_eq!(body.as_deref(), Some("<html>ok</html>"));
    }

    #[tokio::test]
    async fn non_success_status_is_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("Mozilla/5.0").unwrap();
        let url = format!("{}/gone", server.uri());
        assert!(matches!(
            fetcher.try_fetch(&url).await,
            Err(FetchError::Status { status, .. }) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn connection_error_is_no_content() {
        let fetcher = PageFetcher::new("Mozilla/5.0").unwrap();
        assert!(fetcher.fetch("http://127.0.0.1:1/shop/").await.is_none());
    }
}
