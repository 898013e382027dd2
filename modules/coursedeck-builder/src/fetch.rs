use async_trait::async_trait;
use tracing::info;

use coursedeck_common::CourseDeckError;

/// Network fetch capability: text bodies plus status handling.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, CourseDeckError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// GET the url and return the body text. Any non-success status is a
    /// fetch error; nothing is retried.
    async fn fetch_text(&self, url: &str) -> Result<String, CourseDeckError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| CourseDeckError::Fetch(format!("invalid url {url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CourseDeckError::Fetch(format!(
                "only http/https URLs allowed, got: {}",
                parsed.scheme()
            )));
        }

        info!(url, "Fetching template document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CourseDeckError::Fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourseDeckError::Fetch(format!("GET {url}: status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| CourseDeckError::Fetch(format!("GET {url}: body read failed: {e}")))
    }
}
