use crate::config::ClientConfig;
use crate::error::{Result, StargazersError};
use crate::types::RepositoryRef;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Status code and body of one HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub status: u16,
    pub body: String,
}

/// Transport boundary for page fetches. One call is one request.
#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawPage>;
}

/// reqwest-backed transport for the public listing pages.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient { client })
    }
}

#[async_trait]
impl PageTransport for GitHubClient {
    async fn get(&self, url: &str) -> Result<RawPage> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // Only a 200 carries a page; the status alone classifies the rest.
            return Ok(RawPage {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = response.text().await?;
        Ok(RawPage {
            status: status.as_u16(),
            body,
        })
    }
}

/// Maps a response onto the page body or the matching error kind.
pub fn classify_response(page: RawPage, repository: &RepositoryRef) -> Result<String> {
    match StatusCode::from_u16(page.status) {
        Ok(StatusCode::OK) => Ok(page.body),
        Ok(StatusCode::TOO_MANY_REQUESTS) => Err(StargazersError::RateLimited),
        Ok(StatusCode::NOT_FOUND) => Err(StargazersError::NotFound(repository.clone())),
        _ => Err(StargazersError::Transport(page.status)),
    }
}

/// Fetches one listing page. No retries: the first failure is returned.
pub async fn fetch_page<T>(transport: &T, url: &str, repository: &RepositoryRef) -> Result<String>
where
    T: PageTransport + ?Sized,
{
    let page = transport.get(url).await?;
    debug!(url, status = page.status, "Fetched stargazers page");

    classify_response(page, repository).inspect_err(|e| {
        warn!(url, repository = %repository, "Page fetch failed: {}", e);
    })
}
