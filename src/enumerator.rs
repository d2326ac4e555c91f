use crate::config::{ClientConfig, GITHUB_URL};
use crate::error::Result;
use crate::github::{fetch_page, GitHubClient, PageTransport};
use crate::html;
use crate::types::{RepositoryRef, Stargazer};
use tracing::{debug, info};

/// Position of a walk over the listing pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWalk {
    /// 1-based number of the next page to fetch.
    pub page: u32,
    /// Stargazers of the page fetched before it.
    pub previous: Vec<Stargazer>,
}

impl PageWalk {
    pub fn start() -> Self {
        PageWalk {
            page: 1,
            previous: Vec::new(),
        }
    }
}

/// Result of advancing a [`PageWalk`] by one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Page {
        stargazers: Vec<Stargazer>,
        next: PageWalk,
    },
    Done,
}

/// Walks the stargazers listing of one repository, one page at a time.
pub struct StargazerEnumerator<T> {
    repository: RepositoryRef,
    base_url: String,
    transport: T,
}

impl StargazerEnumerator<GitHubClient> {
    pub fn from_config(identifier: &str, config: &ClientConfig) -> Result<Self> {
        let repository = RepositoryRef::parse(identifier)?;

        Ok(StargazerEnumerator {
            repository,
            base_url: config.base().to_string(),
            transport: GitHubClient::new(config)?,
        })
    }
}

impl<T: PageTransport> StargazerEnumerator<T> {
    /// Fails with `InvalidIdentifier` before any request is made.
    pub fn new(identifier: &str, transport: T) -> Result<Self> {
        let repository = RepositoryRef::parse(identifier)?;

        Ok(StargazerEnumerator {
            repository,
            base_url: GITHUB_URL.to_string(),
            transport,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Fetches and extracts the page `walk` points at.
    ///
    /// The walk is done when the page is empty or repeats the previous page.
    pub async fn step(&self, walk: PageWalk) -> Result<Step> {
        let url = self.repository.page_url(&self.base_url, walk.page);
        let body = fetch_page(&self.transport, &url, &self.repository).await?;
        let stargazers = html::extract_stargazers(&body)?;

        if stargazers.is_empty() {
            debug!(page = walk.page, repository = %self.repository, "Reached end of stargazers");
            return Ok(Step::Done);
        }

        if same_names(&stargazers, &walk.previous) {
            debug!(page = walk.page, repository = %self.repository, "Page repeats previous names");
            return Ok(Step::Done);
        }

        info!(
            "Fetched page {} with {} stargazers for repo {}",
            walk.page,
            stargazers.len(),
            self.repository
        );

        let next = PageWalk {
            page: walk.page + 1,
            previous: stargazers.clone(),
        };
        Ok(Step::Page { stargazers, next })
    }

    /// All stargazers sorted by name, then login. Repeats are kept.
    pub async fn list_all_stargazers(&self) -> Result<Vec<Stargazer>> {
        let mut all = Vec::new();
        let mut walk = PageWalk::start();

        loop {
            walk = match self.step(walk).await? {
                Step::Page { stargazers, next } => {
                    all.extend(stargazers);
                    next
                }
                Step::Done => break,
            };
        }

        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.login.cmp(&b.login)));
        Ok(all)
    }

    /// Names of all stargazers, sorted.
    pub async fn list_all(&self) -> Result<Vec<String>> {
        let stargazers = self.list_all_stargazers().await?;
        Ok(stargazers.into_iter().map(|s| s.name).collect())
    }

    /// Whether `user` (display name or login) starred the repository.
    ///
    /// Stops at the first page that contains it.
    pub async fn is_stargazer(&self, user: &str) -> Result<bool> {
        let mut walk = PageWalk::start();

        loop {
            walk = match self.step(walk).await? {
                Step::Page { stargazers, next } => {
                    if stargazers.iter().any(|s| s.matches(user)) {
                        let page = next.page - 1;
                        info!(user, page, repository = %self.repository, "Found stargazer");
                        return Ok(true);
                    }
                    next
                }
                Step::Done => return Ok(false),
            };
        }
    }
}

// Pages repeat when their name sequences are equal, element by element.
fn same_names(page: &[Stargazer], previous: &[Stargazer]) -> bool {
    page.len() == previous.len() && page.iter().zip(previous).all(|(a, b)| a.name == b.name)
}
